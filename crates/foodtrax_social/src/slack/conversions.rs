//! Conversions from Slack models to FoodTrax types.

use super::SlackMember;
use foodtrax_core::DirectoryEntry;

/// Convert a workspace member into a directory entry keyed by display name.
pub fn member_to_entry(member: SlackMember) -> DirectoryEntry {
    DirectoryEntry::new(
        member.profile().display_name().clone(),
        member.id().clone(),
    )
}

/// Convert a page of members, keeping Slack's order.
///
/// Deactivated accounts are dropped so they cannot shadow an active member
/// with the same display name.
pub fn members_to_entries(members: Vec<SlackMember>) -> Vec<DirectoryEntry> {
    members
        .into_iter()
        .filter(|member| !*member.deleted())
        .map(member_to_entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(json: &str) -> SlackMember {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_uses_profile_display_name() {
        let entry = member_to_entry(member(
            r#"{"id": "U0001", "name": "eli", "profile": {"display_name": "bitoffdev"}}"#,
        ));

        assert_eq!(entry.display_name(), "bitoffdev");
        assert_eq!(entry.user_id(), "U0001");
    }

    #[test]
    fn test_legacy_name_is_not_display_name() {
        let entry = member_to_entry(member(r#"{"id": "U0002", "name": "truckfan"}"#));
        assert_eq!(entry.display_name(), "");
    }

    #[test]
    fn test_order_preserved() {
        let entries = members_to_entries(vec![
            member(r#"{"id": "U2", "profile": {"display_name": "b"}}"#),
            member(r#"{"id": "U1", "profile": {"display_name": "a"}}"#),
        ]);

        let ids: Vec<_> = entries.iter().map(|e| e.user_id().as_str()).collect();
        assert_eq!(ids, vec!["U2", "U1"]);
    }

    #[test]
    fn test_deactivated_members_are_dropped() {
        let entries = members_to_entries(vec![
            member(r#"{"id": "U9", "deleted": true, "profile": {"display_name": "bitoffdev"}}"#),
            member(r#"{"id": "U1", "deleted": false, "profile": {"display_name": "bitoffdev"}}"#),
        ]);

        assert_eq!(entries, vec![DirectoryEntry::new("bitoffdev", "U1")]);
    }
}
