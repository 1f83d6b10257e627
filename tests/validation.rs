//! Validation Integration Tests
//!
//! Tests for constructor and setter validation of content items.

use mediacat::domain::{current_year, Content, IdSequence, InvalidArgument, MIN_YEAR};
use mediacat::{PodcastEpisode, VideoLecture};

#[test]
fn test_valid_construction_describes_fields() {
    let ids = IdSequence::new();
    let video = VideoLecture::new(&ids, "Ownership in Depth", 2015, 75, "HD").unwrap();

    let description = video.describe();
    assert!(description.contains("Title='Ownership in Depth'"));
    assert!(description.contains("Year=2015"));
    assert!(description.contains("Duration=75 min"));
}

#[test]
fn test_blank_titles_rejected() {
    let ids = IdSequence::new();

    for title in ["", " ", "\t\n  "] {
        let result = PodcastEpisode::new(&ids, title, 2020, 30, "Alice");
        assert_eq!(result.unwrap_err(), InvalidArgument::BlankTitle);
    }

    assert!(PodcastEpisode::new(&ids, " padded ", 2020, 30, "Alice").is_ok());
}

#[test]
fn test_year_boundaries() {
    let ids = IdSequence::new();
    let now = current_year();

    assert!(VideoLecture::new(&ids, "Too old", MIN_YEAR - 1, 10, "SD").is_err());
    assert!(VideoLecture::new(&ids, "Oldest", MIN_YEAR, 10, "SD").is_ok());
    assert!(VideoLecture::new(&ids, "Newest", now, 10, "SD").is_ok());

    match VideoLecture::new(&ids, "Future", now + 1, 10, "SD") {
        Err(InvalidArgument::YearOutOfRange { year, min, max }) => {
            assert_eq!(year, now + 1);
            assert_eq!(min, 1990);
            assert_eq!(max, now);
        }
        other => panic!("Expected YearOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_duration_must_be_positive() {
    let ids = IdSequence::new();

    assert_eq!(
        PodcastEpisode::new(&ids, "Empty", 2020, 0, "Bob").unwrap_err(),
        InvalidArgument::NonPositiveDuration(0)
    );
    assert_eq!(
        PodcastEpisode::new(&ids, "Negative", 2020, -15, "Bob").unwrap_err(),
        InvalidArgument::NonPositiveDuration(-15)
    );
    assert!(PodcastEpisode::new(&ids, "Short", 2020, 1, "Bob").is_ok());
}

#[test]
fn test_ids_strictly_increase_across_variants() {
    let ids = IdSequence::new();

    let a = VideoLecture::new(&ids, "A", 2020, 10, "HD").unwrap();
    let b = PodcastEpisode::new(&ids, "B", 2020, 10, "Alice").unwrap();
    let c = VideoLecture::new(&ids, "C", 2020, 10, "4K").unwrap();

    let got = [a.item().id(), b.item().id(), c.item().id()];
    assert_eq!(got[0].get(), 1);
    assert!(got.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_setters_revalidate() {
    let ids = IdSequence::new();
    let mut episode = PodcastEpisode::new(&ids, "Tech Talk", 2020, 40, "Alice").unwrap();

    assert!(episode.item_mut().set_year(current_year() + 1).is_err());
    assert!(episode.item_mut().set_title("").is_err());
    assert_eq!(episode.item().year(), 2020);
    assert_eq!(episode.item().title(), "Tech Talk");

    episode.item_mut().set_year(MIN_YEAR).unwrap();
    episode.item_mut().set_duration_minutes(90).unwrap();
    assert_eq!(episode.item().year(), 1990);
    assert_eq!(episode.item().duration_minutes(), 90);
    assert!(episode.describe().contains("Year=1990, Duration=90 min"));
}
