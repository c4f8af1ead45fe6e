// src/models.rs

/// Options controlling a single password-generation call.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub length: usize,
    pub quantity: usize,
    pub include_numbers: bool,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_symbols: bool,
    pub begin_with_letter: bool,
    pub no_similar_characters: bool,
    pub no_duplicate_characters: bool,
    pub no_sequential_characters: bool,
    pub custom_symbols: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 20,
            quantity: 5,
            include_numbers: true,
            include_lowercase: true,
            include_uppercase: true,
            include_symbols: false,
            begin_with_letter: false,
            no_similar_characters: false,
            no_duplicate_characters: false,
            no_sequential_characters: false,
            custom_symbols: String::new(),
        }
    }
}
