//! Outbound WhatsApp links for following up on a submission.

pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Keeps only the ASCII digits of a free-text phone number.
pub fn digits_only(mobile: &str) -> String {
    mobile.chars().filter(char::is_ascii_digit).collect()
}

pub fn greeting(name: &str, website: &str) -> String {
    format!(
        "Hello {}, regarding your request for {} ID. We will process your request shortly.",
        name, website
    )
}

/// `https://wa.me/<digits>?text=<greeting>` for the given submitter.
pub fn compose_contact_link(mobile: &str, name: &str, website: &str) -> String {
    format!(
        "{}{}?text={}",
        WHATSAPP_BASE_URL,
        digits_only(mobile),
        urlencoding::encode(&greeting(name, website))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_non_digit() {
        assert_eq!(digits_only("+91 (999) 888-7776"), "919998887776");
        assert_eq!(digits_only("no digits"), "");
    }

    #[test]
    fn link_encodes_greeting() {
        let link = compose_contact_link("+91 99988 87776", "Alex", "SiteA");
        assert_eq!(
            link,
            "https://wa.me/919998887776?text=Hello%20Alex%2C%20regarding%20your%20request%20for%20SiteA%20ID.%20We%20will%20process%20your%20request%20shortly."
        );
    }

    #[test]
    fn reserved_characters_in_name_are_escaped() {
        let link = compose_contact_link("1", "A&B", "x?y");
        assert!(link.contains("A%26B"));
        assert!(link.contains("x%3Fy"));
        assert_eq!(link.matches('?').count(), 1);
    }
}
