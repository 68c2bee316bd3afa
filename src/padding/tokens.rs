use extend::ext;

// Joining helpers for a sequence of string tokens.
#[ext(pub, name = TokenSliceExt)]
impl<S: AsRef<str>> [S] {
    /// Concatenate every token into one string.
    fn join_tokens(&self) -> String {
        let mut joined = String::new();
        for token in self {
            joined.push_str(token.as_ref());
        }
        joined
    }

    /// Length in chars of the joined sequence.
    fn joined_len(&self) -> usize {
        self.iter().map(|token| token.as_ref().chars().count()).sum()
    }
}

// Splitting a raw string into tokens.
#[ext(pub, name = StrTokensExt)]
impl str {
    /// One token per char.
    fn char_tokens(&self) -> Vec<String> {
        self.chars().map(String::from).collect()
    }

    /// Tokens separated by `delimiter`; empty pieces are dropped.
    fn delimited_tokens(&self, delimiter: &str) -> Vec<String> {
        self.split(delimiter)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }
}
