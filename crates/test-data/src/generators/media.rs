//! Photo and diary generation along a track.

use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use rand::Rng;

use trips::models::{DiaryEntry, LocationSample, TripPhoto};

/// Generates photos and diary entries positioned at points of an existing
/// track, so their locations and timestamps are consistent with the journey.
pub struct MediaGenerator;

impl MediaGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` photos at random track positions, oldest first.
    pub fn photos(
        &self,
        trip_id: i64,
        samples: &[LocationSample],
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<TripPhoto> {
        if samples.is_empty() {
            return Vec::new();
        }

        let mut photos: Vec<TripPhoto> = (0..count)
            .map(|i| {
                let at = &samples[rng.gen_range(0..samples.len())];
                let caption: String = Sentence(2..6).fake_with_rng(rng);
                TripPhoto {
                    trip_id,
                    file_path: format!("/photos/{trip_id}/{i:04}.jpg"),
                    latitude: Some(at.latitude),
                    longitude: Some(at.longitude),
                    caption,
                    timestamp_ms: at.timestamp_ms,
                }
            })
            .collect();

        photos.sort_by_key(|p| p.timestamp_ms);
        photos
    }

    /// Generates `count` diary entries at random track positions, oldest
    /// first.
    pub fn diary_entries(
        &self,
        trip_id: i64,
        samples: &[LocationSample],
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<DiaryEntry> {
        if samples.is_empty() {
            return Vec::new();
        }

        let mut entries: Vec<DiaryEntry> = (0..count)
            .map(|_| {
                let at = &samples[rng.gen_range(0..samples.len())];
                let title_words: Vec<String> = Words(2..5).fake_with_rng(rng);
                let body: String = Paragraph(2..5).fake_with_rng(rng);
                DiaryEntry {
                    trip_id,
                    title: title_words.join(" "),
                    body,
                    latitude: Some(at.latitude),
                    longitude: Some(at.longitude),
                    photo_ref: None,
                    timestamp_ms: at.timestamp_ms,
                }
            })
            .collect();

        entries.sort_by_key(|e| e.timestamp_ms);
        entries
    }
}

impl Default for MediaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
