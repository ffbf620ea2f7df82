use super::{ApiError, SeriePayload};
use crate::models::serie::SerieDraft;

/// Message used when a request body cannot be decoded at all.
pub const INVALID_DATA: &str = "Invalid data";

/// Parses a path identifier. Empty and non-integer input are both rejected,
/// with distinct messages.
pub fn parse_serie_id(raw: &str) -> Result<i32, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("The identifier is invalid"));
    }

    trimmed
        .parse::<i32>()
        .map_err(|_| ApiError::validation(format!("The identifier {} is invalid", raw)))
}

/// Checks the fields every stored record needs and builds the draft.
fn draft_from_payload(payload: SeriePayload) -> Result<SerieDraft, &'static str> {
    let title = payload
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or("title is required")?;
    let season = payload.season.ok_or("season is required")?;
    let episode_count = payload.episode_count.ok_or("episodeCount is required")?;

    Ok(SerieDraft {
        title,
        synopsis: payload.synopsis,
        season,
        episode_count,
        cast: payload.cast,
        category: payload.category,
    })
}

/// Validates a create body. Any client-supplied `id` is discarded.
pub fn validate_new_serie(payload: SeriePayload) -> Result<SerieDraft, ApiError> {
    draft_from_payload(payload)
        .map_err(|reason| ApiError::validation(format!("{}: {}", INVALID_DATA, reason)))
}

/// Validates an update body, which must carry the id of the record it replaces.
pub fn validate_serie_update(payload: SeriePayload) -> Result<(i32, SerieDraft), ApiError> {
    let label = update_label(&payload);

    let Some(id) = payload.id else {
        return Err(update_failure(&label, "id is required"));
    };

    let draft = draft_from_payload(payload).map_err(|reason| update_failure(&label, reason))?;
    Ok((id, draft))
}

pub fn update_failure(label: &str, reason: &str) -> ApiError {
    if label.is_empty() {
        ApiError::validation(format!(
            "There was an error updating the series: {}",
            reason
        ))
    } else {
        ApiError::validation(format!(
            "There was an error updating the series {}: {}",
            label, reason
        ))
    }
}

fn update_label(payload: &SeriePayload) -> String {
    let title = payload.title.as_deref().map(str::trim).unwrap_or_default();
    match (title.is_empty(), payload.season) {
        (false, Some(season)) => format!("{}, season {}", title, season),
        (false, None) => title.to_string(),
        (true, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SeriePayload {
        SeriePayload {
            id: Some(1),
            title: Some("Star Trek".to_string()),
            synopsis: Some("...".to_string()),
            season: Some(4),
            episode_count: Some(25),
            cast: Some("A, B, C".to_string()),
            category: Some("Drama".to_string()),
        }
    }

    #[test]
    fn test_parse_serie_id() {
        assert_eq!(parse_serie_id("1").unwrap(), 1);
        assert_eq!(parse_serie_id(" 42 ").unwrap(), 42);
        assert_eq!(parse_serie_id("-3").unwrap(), -3);
        assert!(parse_serie_id("").is_err());
        assert!(parse_serie_id("   ").is_err());
        assert!(parse_serie_id("abc").is_err());
        assert!(parse_serie_id("1.5").is_err());
        assert!(parse_serie_id("99999999999").is_err());
    }

    #[test]
    fn test_parse_serie_id_messages() {
        match parse_serie_id("") {
            Err(ApiError::ValidationError(msg)) => assert_eq!(msg, "The identifier is invalid"),
            other => panic!("unexpected: {other:?}"),
        }
        match parse_serie_id("abc") {
            Err(ApiError::ValidationError(msg)) => {
                assert_eq!(msg, "The identifier abc is invalid");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_new_serie_ignores_id() {
        let draft = validate_new_serie(SeriePayload {
            id: Some(77),
            ..payload()
        })
        .unwrap();
        assert_eq!(draft.title, "Star Trek");
        assert_eq!(draft.season, 4);
    }

    #[test]
    fn test_validate_new_serie_required_fields() {
        assert!(validate_new_serie(SeriePayload { title: None, ..payload() }).is_err());
        assert!(
            validate_new_serie(SeriePayload {
                title: Some("  ".to_string()),
                ..payload()
            })
            .is_err()
        );
        assert!(validate_new_serie(SeriePayload { season: None, ..payload() }).is_err());
        assert!(
            validate_new_serie(SeriePayload {
                episode_count: None,
                ..payload()
            })
            .is_err()
        );
        assert!(
            validate_new_serie(SeriePayload {
                synopsis: None,
                cast: None,
                category: None,
                ..payload()
            })
            .is_ok()
        );
    }

    #[test]
    fn test_validate_serie_update() {
        let (id, draft) = validate_serie_update(payload()).unwrap();
        assert_eq!(id, 1);
        assert_eq!(draft.episode_count, 25);

        match validate_serie_update(SeriePayload { id: None, ..payload() }) {
            Err(ApiError::ValidationError(msg)) => assert_eq!(
                msg,
                "There was an error updating the series Star Trek, season 4: id is required"
            ),
            other => panic!("unexpected: {other:?}"),
        }

        match validate_serie_update(SeriePayload::default()) {
            Err(ApiError::ValidationError(msg)) => {
                assert_eq!(msg, "There was an error updating the series: id is required");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
