//! Canned-response matcher for demo mode.
//!
//! When no validated credential is available, replies come from a
//! case-insensitive substring match against two fixed keyword groups.
//! The FIR group is checked first; the tie-break matters when a query
//! mentions both topics.

use nyaya_types::template::{TemplateId, template};

/// Keywords routed to the FIR-procedure paragraph. Checked first.
const FIR_KEYWORDS: [&str; 2] = ["fir", "police complaint"];

/// Keywords routed to the tenancy paragraph.
const TENANCY_KEYWORDS: [&str; 4] = ["landlord", "tenant", "rent", "evict"];

/// Produce a canned reply for a free-text query.
///
/// Deterministic, pure, side-effect free; always returns a string. The
/// generic fallback interpolates the original (not lowercased) query
/// exactly once.
pub fn simulated_reply(query: &str) -> String {
    let lowered = query.to_lowercase();

    if FIR_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return template(TemplateId::FirProcedure).text.to_string();
    }

    if TENANCY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return template(TemplateId::TenancyGuidance).text.to_string();
    }

    template(TemplateId::GeneralGuidance).render_query(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fir_query_returns_fir_paragraph_verbatim() {
        let reply = simulated_reply("How do I file an FIR in India?");
        assert_eq!(reply, template(TemplateId::FirProcedure).text);
        assert!(reply.starts_with("An FIR (First Information Report) can be filed"));
    }

    #[test]
    fn test_police_complaint_triggers_fir_paragraph() {
        let reply = simulated_reply("Where can I lodge a POLICE COMPLAINT?");
        assert_eq!(reply, template(TemplateId::FirProcedure).text);
    }

    #[test]
    fn test_tenancy_keywords_return_tenancy_paragraph_verbatim() {
        for query in [
            "My landlord is threatening me",
            "What are my rights as a Tenant?",
            "Can rent be raised mid-lease?",
            "They want to EVICT me tomorrow",
        ] {
            let reply = simulated_reply(query);
            assert_eq!(reply, template(TemplateId::TenancyGuidance).text);
        }
    }

    #[test]
    fn test_fir_group_wins_when_both_groups_match() {
        let reply = simulated_reply("My landlord refuses to let me file an FIR");
        assert_eq!(reply, template(TemplateId::FirProcedure).text);
    }

    #[test]
    fn test_generic_fallback_interpolates_original_query_once() {
        let query = "What Is The GST Rate For Legal Services?";
        let reply = simulated_reply(query);
        assert_eq!(reply.matches(query).count(), 1);
        assert!(!reply.contains("{query}"));
        // Original casing preserved; only the match was lowercased.
        assert!(reply.contains("What Is The GST Rate"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            simulated_reply("HOW DO I FILE AN FIR?"),
            simulated_reply("how do i file an fir?")
        );
    }
}
