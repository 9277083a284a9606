use super::types::{ClubSummary, StravaClub, text_or};

pub const CLUB_URL_BASE: &str = "https://www.strava.com/clubs";

/// Public club page, preferring the vanity slug over the numeric id.
#[must_use]
pub fn club_url(slug: Option<&str>, club_id: &str) -> String {
    let path = slug.filter(|s| !s.is_empty()).unwrap_or(club_id);
    format!("{CLUB_URL_BASE}/{path}")
}

#[must_use]
pub fn summarize(club: StravaClub, club_id: &str) -> ClubSummary {
    ClubSummary {
        strava_url: club_url(club.url.as_deref(), club_id),
        id: club.id,
        name: club.name,
        description: text_or(club.description, ""),
        member_count: club.member_count,
        city: text_or(club.city, ""),
        country: text_or(club.country, ""),
        profile_image: text_or(club.profile_medium, ""),
        cover_image: text_or(club.cover_photo, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_maps_images_and_counts() {
        let club = StravaClub {
            id: 42,
            name: "20,000 km".into(),
            description: None,
            city: Some("Lisbon".into()),
            country: Some("Portugal".into()),
            member_count: 318,
            profile_medium: Some("https://img/profile.jpg".into()),
            cover_photo: None,
            url: Some("20000km".into()),
        };
        let summary = summarize(club, "42");
        assert_eq!(summary.member_count, 318);
        assert_eq!(summary.description, "");
        assert_eq!(summary.profile_image, "https://img/profile.jpg");
        assert_eq!(summary.cover_image, "");
        assert_eq!(summary.strava_url, "https://www.strava.com/clubs/20000km");
    }

    #[test]
    fn url_falls_back_to_the_configured_id() {
        assert_eq!(club_url(None, "1234"), "https://www.strava.com/clubs/1234");
        assert_eq!(club_url(Some(""), "1234"), "https://www.strava.com/clubs/1234");
    }
}
