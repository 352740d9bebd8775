//! GPX 1.1 rendering for a trip's location track.
//!
//! The document is built by hand rather than through a GPX writer: the
//! output keeps the upstream field rules exactly — `<ele>` only for known
//! altitudes, an unconditional `<time>`, and the loosely-accepted
//! non-standard `<accuracy>` extension.

use crate::errors::TripError;
use crate::format::{escape_xml, utc_timestamp};
use crate::models::{LocationSample, Trip};

/// Value of the `creator` attribute on the `<gpx>` root.
pub const GPX_CREATOR: &str = "TripJournal";

/// Renders a GPX 1.1 document for the trip. Samples must already be in
/// timestamp order.
pub fn render_gpx(trip: &Trip, samples: &[LocationSample]) -> Result<String, TripError> {
    let mut gpx = String::new();

    gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    gpx.push('\n');
    gpx.push_str(r#"<gpx version="1.1" creator=""#);
    gpx.push_str(GPX_CREATOR);
    gpx.push('"');
    gpx.push_str(r#" xmlns="http://www.topografix.com/GPX/1/1""#);
    gpx.push_str(r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#);
    gpx.push_str(r#" xsi:schemaLocation="http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd">"#);
    gpx.push('\n');

    gpx.push_str("  <metadata>\n");
    gpx.push_str(&format!("    <name>{}</name>\n", escape_xml(&trip.name)));
    gpx.push_str(&format!(
        "    <desc>{}</desc>\n",
        escape_xml(&trip.description)
    ));
    gpx.push_str(&format!(
        "    <time>{}</time>\n",
        utc_timestamp(trip.started_at_ms)?
    ));
    gpx.push_str("  </metadata>\n");

    gpx.push_str("  <trk>\n");
    gpx.push_str(&format!("    <name>{}</name>\n", escape_xml(&trip.name)));
    gpx.push_str("    <trkseg>\n");

    for sample in samples {
        gpx.push_str(&format!(
            "      <trkpt lat=\"{}\" lon=\"{}\">\n",
            sample.latitude, sample.longitude
        ));
        if sample.altitude.0 > 0.0 {
            gpx.push_str(&format!("        <ele>{}</ele>\n", sample.altitude.0));
        }
        gpx.push_str(&format!(
            "        <time>{}</time>\n",
            utc_timestamp(sample.timestamp_ms)?
        ));
        if sample.accuracy.0 > 0.0 {
            gpx.push_str(&format!(
                "        <accuracy>{}</accuracy>\n",
                sample.accuracy.0
            ));
        }
        gpx.push_str("      </trkpt>\n");
    }

    gpx.push_str("    </trkseg>\n");
    gpx.push_str("  </trk>\n");
    gpx.push_str("</gpx>\n");

    Ok(gpx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Meters, MetersPerSecond};

    fn trip(name: &str) -> Trip {
        Trip {
            id: 1,
            name: name.into(),
            description: "Through the high valleys".into(),
            started_at_ms: 1_619_872_245_000,
            ended_at_ms: None,
            is_active: true,
        }
    }

    fn sample(lat: f64, lon: f64, altitude: f64, accuracy: f64) -> LocationSample {
        LocationSample {
            trip_id: 1,
            latitude: lat,
            longitude: lon,
            altitude: Meters(altitude),
            accuracy: Meters(accuracy),
            speed: MetersPerSecond(1.2),
            bearing: 45.0,
            timestamp_ms: 1_619_872_245_000,
            temperature_c: None,
            humidity_pct: None,
            weather_condition: None,
        }
    }

    #[test]
    fn test_header_and_metadata() {
        let gpx = render_gpx(&trip("Alps Trek"), &[]).unwrap();
        assert!(gpx.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(gpx.contains(r#"creator="TripJournal""#));
        assert!(gpx.contains(r#"xmlns="http://www.topografix.com/GPX/1/1""#));
        assert!(gpx.contains("<name>Alps Trek</name>"));
        assert!(gpx.contains("<desc>Through the high valleys</desc>"));
        assert!(gpx.contains("<time>2021-05-01T12:30:45Z</time>"));
    }

    #[test]
    fn test_elevation_only_when_known() {
        let gpx = render_gpx(
            &trip("Alps Trek"),
            &[sample(46.0, 8.0, 1000.0, 5.0), sample(46.01, 8.01, 0.0, 5.0)],
        )
        .unwrap();
        assert_eq!(gpx.matches("<trkpt").count(), 2);
        assert_eq!(gpx.matches("<ele>").count(), 1);
        assert!(gpx.contains("<ele>1000</ele>"));
    }

    #[test]
    fn test_accuracy_only_when_positive() {
        let gpx = render_gpx(
            &trip("Alps Trek"),
            &[sample(46.0, 8.0, 0.0, 8.5), sample(46.01, 8.01, 0.0, 0.0)],
        )
        .unwrap();
        assert_eq!(gpx.matches("<accuracy>").count(), 1);
        assert!(gpx.contains("<accuracy>8.5</accuracy>"));
    }

    #[test]
    fn test_time_always_emitted() {
        let gpx = render_gpx(&trip("Alps Trek"), &[sample(46.0, 8.0, 0.0, 0.0)]).unwrap();
        // metadata time + one per point
        assert_eq!(gpx.matches("<time>").count(), 2);
    }

    #[test]
    fn test_name_is_escaped_once() {
        let gpx = render_gpx(&trip(r#"A & B "C" <D> 'E'"#), &[]).unwrap();
        assert!(gpx.contains("<name>A &amp; B &quot;C&quot; &lt;D&gt; &apos;E&apos;</name>"));
        assert!(!gpx.contains("&amp;amp;"));
    }
}
