//! Contact Extractor — best-effort regex extraction of visitor contact
//! details from free text. This is a heuristic, not a parser: only the first
//! match of each pattern is used and no validation happens beyond the shape.

use regex::Regex;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:name\s*(?::|is)?\s*|i'm\s+|i am\s+|this is\s+)([a-zA-Z][a-zA-Z\s]{2,30})")
        .expect("name regex is valid")
});
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:phone\s*:?\s*|call\s*:?\s*|mobile\s*:?\s*)?(\+?(?:[0-9]{1,3}[\s-]?)?[0-9]{10,14})")
        .expect("phone regex is valid")
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+").expect("email regex is valid")
});
static COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:company\s*:?\s*|work at\s+|from\s+)([a-zA-Z][a-zA-Z\s&.,]{2,50})")
        .expect("company regex is valid")
});
static DESIGNATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:designation\s*:?\s*|role\s*:?\s*|i'm a\s+|i am a\s+)([a-zA-Z][a-zA-Z\s]{2,30})")
        .expect("designation regex is valid")
});
static CONTACT_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)name|phone|email|company|contact|connect|reach|hire|collaborate")
        .expect("contact keyword regex is valid")
});
static RAW_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[0-9]{10,15}").expect("raw phone regex is valid"));

/// Fields extracted from a single message. Every field is optional; the
/// notify path downstream requires `name` and `phone` together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub designation: Option<String>,
}

impl ContactInfo {
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.phone.is_some()
    }
}

/// Scans `text` once per pattern and returns whatever matched.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    let phone = capture(&PHONE_RE).map(|p| p.replace([' ', '-'], ""));

    ContactInfo {
        name: capture(&NAME_RE),
        phone,
        email: EMAIL_RE.find(text).map(|m| m.as_str().trim().to_string()),
        company: capture(&COMPANY_RE),
        designation: capture(&DESIGNATION_RE),
    }
}

/// True when the message looks like contact intent: either a contact keyword
/// or a directly embedded phone number / email address.
pub fn has_contact_signal(text: &str) -> bool {
    CONTACT_KEYWORD_RE.is_match(text) || RAW_PHONE_RE.is_match(text) || EMAIL_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_name_phone_email_together() {
        let info =
            extract_contact_info("My name is Anish Kumar, phone 9876543210, email a@b.com");
        assert_eq!(info.name.as_deref(), Some("Anish Kumar"));
        assert_eq!(info.phone.as_deref(), Some("9876543210"));
        assert_eq!(info.email.as_deref(), Some("a@b.com"));
        assert_eq!(info.company, None);
        assert_eq!(info.designation, None);
        assert!(info.is_complete());
    }

    #[test]
    fn test_name_cue_variants() {
        let a = extract_contact_info("Name: John Doe");
        assert_eq!(a.name.as_deref(), Some("John Doe"));

        let b = extract_contact_info("Hi, this is Bob Martin calling");
        assert_eq!(b.name.as_deref(), Some("Bob Martin calling"));

        let c = extract_contact_info("hello there");
        assert_eq!(c.name, None);
    }

    #[test]
    fn test_phone_separators_are_stripped() {
        let info = extract_contact_info("you can call me at +91-9876543210");
        assert_eq!(info.phone.as_deref(), Some("+919876543210"));
    }

    #[test]
    fn test_bare_ten_digit_phone_matches() {
        let info = extract_contact_info("9876543210");
        assert_eq!(info.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_company_and_designation_cues() {
        let info = extract_contact_info(
            "Name: Priya Sharma, phone 9876501234, company: Acme Corp, role: product manager",
        );
        assert_eq!(info.name.as_deref(), Some("Priya Sharma"));
        assert!(info.company.as_deref().unwrap().starts_with("Acme Corp"));
        assert!(info
            .designation
            .as_deref()
            .unwrap()
            .starts_with("product manager"));
    }

    #[test]
    fn test_missing_phone_is_incomplete() {
        let info = extract_contact_info("I'm Alice and I want to collaborate");
        assert!(info.name.is_some());
        assert_eq!(info.phone, None);
        assert!(!info.is_complete());
    }

    #[test]
    fn test_contact_signal_on_keywords() {
        assert!(has_contact_signal("I want to hire you"));
        assert!(has_contact_signal("how can I reach him?"));
        assert!(has_contact_signal("my email is a@b.com"));
        assert!(has_contact_signal("call 9876543210"));
    }

    #[test]
    fn test_no_contact_signal_on_plain_question() {
        assert!(!has_contact_signal("Tell me about the projects"));
        assert!(!has_contact_signal("What skills does he have?"));
    }
}
