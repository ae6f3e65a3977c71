/// Token representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,      // The token text, rewritten in place by filters
    pub position: u32,     // Index of the token within its line
    pub offset: usize,     // Byte offset in the original line
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        Token {
            text,
            position,
            offset,
        }
    }
}
