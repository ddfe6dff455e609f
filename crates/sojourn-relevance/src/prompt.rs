//! Prompt construction for the batched scoring call.

use std::fmt::Write as _;

use crate::types::{ScoutContext, VendorForScoring};

pub(crate) const SYSTEM_PROMPT: &str = "You rate how well local service vendors fit a retreat \
organizer's needs. Reply with ONLY a JSON array, no prose and no code fences. Each element must \
be {\"name\": string, \"relevance_score\": integer 0-100, \"relevance_reason\": one short \
sentence}. Use the exact vendor names you were given.";

/// Renders the single batched user prompt listing every vendor plus the
/// requester's context. Field order is fixed so identical input produces an
/// identical prompt.
pub(crate) fn build_user_prompt(vendors: &[VendorForScoring], context: &ScoutContext) -> String {
    let mut prompt = format!(
        "A retreat organizer is looking for {} services near {}.\n",
        context.category, context.location
    );
    if let Some(description) = &context.retreat_description {
        let _ = writeln!(prompt, "About the retreat: {description}");
    }
    let _ = writeln!(
        prompt,
        "\nScore each of the following {} candidate vendors:",
        vendors.len()
    );

    for vendor in vendors {
        let _ = write!(prompt, "- name: {}; address: {}", vendor.name, vendor.address);
        if let Some(website) = &vendor.website {
            let _ = write!(prompt, "; website: {website}");
        }
        if let Some(rating) = vendor.rating {
            let _ = write!(prompt, "; rating: {rating}");
        }
        if let Some(reviews) = vendor.review_count {
            let _ = write!(prompt, "; reviews: {reviews}");
        }
        let _ = writeln!(prompt, "; contact: {}", vendor.email);
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(name: &str) -> VendorForScoring {
        VendorForScoring {
            name: name.to_string(),
            address: "Jalan Raya 1, Ubud".to_string(),
            website: Some("https://example-vendor.id".to_string()),
            rating: Some(4.5),
            review_count: Some(12),
            email: "info@example-vendor.id".to_string(),
        }
    }

    fn context() -> ScoutContext {
        ScoutContext {
            category: "Catering".to_string(),
            location: "Ubud, Bali".to_string(),
            retreat_description: Some("A 20-person silent meditation retreat".to_string()),
        }
    }

    #[test]
    fn prompt_lists_every_vendor_and_context() {
        let vendors = vec![vendor("Warung A"), vendor("Warung B")];
        let prompt = build_user_prompt(&vendors, &context());

        assert!(prompt.contains("Catering services near Ubud, Bali"));
        assert!(prompt.contains("silent meditation retreat"));
        assert!(prompt.contains("name: Warung A;"));
        assert!(prompt.contains("name: Warung B;"));
        assert!(prompt.contains("rating: 4.5"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let vendors = vec![vendor("Warung A")];
        assert_eq!(
            build_user_prompt(&vendors, &context()),
            build_user_prompt(&vendors, &context())
        );
    }

    #[test]
    fn prompt_omits_absent_optional_fields() {
        let mut v = vendor("Warung A");
        v.website = None;
        v.rating = None;
        v.review_count = None;
        let prompt = build_user_prompt(&[v], &context());

        assert!(!prompt.contains("website:"));
        assert!(!prompt.contains("rating:"));
        assert!(!prompt.contains("reviews:"));
    }
}
