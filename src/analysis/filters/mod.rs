pub mod ascii_letters;
pub mod lowercase;
pub mod min_length;
