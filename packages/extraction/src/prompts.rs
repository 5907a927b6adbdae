//! LLM prompts for CV profile extraction.
//!
//! The field labels are the French wire keys of [`CvProfile`]
//! (crate::types::profile::CvProfile); the model must echo them verbatim
//! so the reply deserializes directly.

/// System prompt for the extraction call.
pub const SYSTEM_PROMPT: &str = "You are a precise information extraction engine \
for CV and resume documents. You reply with a single JSON object and nothing else.";

/// Prompt for extracting the personal-information profile from document text.
pub const EXTRACT_PROMPT: &str = r#"Read and analyze the following text extracted from a document:

{doc_text}

Extract the fields below and return one valid JSON object:

- "Nom" (string): last name
- "Prénom" (string): first name
- "Nom de jeune fille" (string): maiden name
- "Numéro d'employé" (string): employee number
- "Titre" (string): job title, e.g. "Ingénieur", "Développeur"
- "Date de naissance" (string, JJ/MM/AAAA): birth date
- "Lieu de naissance" (string): birth place
- "Nationalité" (string): nationality
- "Sexe" (string, e.g. "Homme", "Femme"): gender
- "Situation familiale" (string, e.g. "Célibataire", "Marié(e)"): marital status
- "Nombre d'enfants" (integer): number of children
- "Numéro de sécurité sociale" (string): social security number
- "Adresse postale" (string): postal address
- "Code postal" (string): postal code
- "Adresse e-mail" (string): email address
- "Numéro de téléphone" (string): phone number
- "Adresse" (string): address

Make sure the output is valid JSON and nothing else.
Any missing field must be null (or 0 for the integer); do not skip any field."#;

/// Fill the extraction prompt with document text.
pub fn format_extract_prompt(doc_text: &str) -> String {
    EXTRACT_PROMPT.replace("{doc_text}", doc_text)
}
