/// Map the backend's free-form status strings onto badge variants. The
/// strings are not enumerated anywhere; unknown ones render neutral.
pub fn status_variant(status: &str) -> &'static str {
    match status {
        "ACTIVE" | "COMPLETED" | "ACCEPTED" | "APPROVED" | "DELIVERED" => "success",
        "PENDING" | "DRAFT" => "warning",
        "ASSIGNED" | "IN_PROGRESS" | "PROCESSING" | "SHIPPED" => "primary",
        "INACTIVE" | "EXPIRED" => "neutral",
        "CANCELLED" | "REJECTED" | "BLOCKED" | "FAILED" => "error",
        _ => "neutral",
    }
}

/// Human form of a SCREAMING_SNAKE status for table cells.
pub fn humanize_status(status: &str) -> String {
    status.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("ACTIVE"), "success");
        assert_eq!(status_variant("CANCELLED"), "error");
        assert_eq!(status_variant("SOMETHING_ELSE"), "neutral");
    }

    #[test]
    fn test_humanize_status() {
        assert_eq!(humanize_status("NEW_INSTALLATION"), "NEW INSTALLATION");
    }
}
