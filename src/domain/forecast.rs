use chrono::NaiveTime;

use crate::domain::weather::{ForecastEntry, RawForecastSample, parse_forecast_time};

/// Upper bound on the daily strip; the provider's free tier covers five days.
pub const MAX_FORECAST_DAYS: usize = 5;

fn local_noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Keeps the samples stamped exactly at 12:00:00, in input order, capped at five days.
///
/// Samples with an unparseable `dt_txt` are skipped.
#[must_use]
pub fn reduce_daily(samples: &[RawForecastSample]) -> Vec<ForecastEntry> {
    let noon = local_noon();
    samples
        .iter()
        .filter_map(|sample| {
            let time = parse_forecast_time(&sample.dt_txt)?;
            (time.time() == noon).then(|| ForecastEntry {
                timestamp_local_noon: time,
                condition_main: sample.condition_main.clone(),
                description: sample.description.clone(),
                temperature_c: sample.temperature_c,
            })
        })
        .take(MAX_FORECAST_DAYS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(dt_txt: &str, temp: f32) -> RawForecastSample {
        RawForecastSample {
            dt: 0,
            dt_txt: dt_txt.to_string(),
            temperature_c: temp,
            condition_main: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
        }
    }

    fn three_hourly(days: u32) -> Vec<RawForecastSample> {
        (0..days)
            .flat_map(|day| {
                (0..8).map(move |step| {
                    sample(
                        &format!("2026-02-{:02} {:02}:00:00", 12 + day, step * 3),
                        f32::from(u8::try_from(step).unwrap_or(0)),
                    )
                })
            })
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(reduce_daily(&[]).is_empty());
    }

    #[test]
    fn keeps_only_noon_samples_in_order() {
        let samples = three_hourly(3);
        let daily = reduce_daily(&samples);
        assert_eq!(daily.len(), 3);
        let days = daily
            .iter()
            .map(|entry| entry.timestamp_local_noon.format("%d").to_string())
            .collect::<Vec<_>>();
        assert_eq!(days, vec!["12", "13", "14"]);
        assert!(daily.iter().all(|entry| entry.temperature_c == 4.0));
    }

    #[test]
    fn caps_output_at_five_days() {
        let daily = reduce_daily(&three_hourly(7));
        assert_eq!(daily.len(), MAX_FORECAST_DAYS);
    }

    #[test]
    fn partial_final_day_shortens_the_strip() {
        let mut samples = three_hourly(4);
        samples.extend(
            ["2026-02-16 00:00:00", "2026-02-16 03:00:00"]
                .into_iter()
                .map(|dt| sample(dt, 1.0)),
        );
        assert_eq!(reduce_daily(&samples).len(), 4);
    }

    #[test]
    fn no_noon_samples_yield_empty_output() {
        let samples = vec![
            sample("2026-02-12 09:00:00", 1.0),
            sample("2026-02-12 15:00:00", 2.0),
        ];
        assert!(reduce_daily(&samples).is_empty());
    }

    #[test]
    fn does_not_resort_out_of_order_input() {
        let samples = vec![
            sample("2026-02-14 12:00:00", 3.0),
            sample("2026-02-12 12:00:00", 1.0),
        ];
        let daily = reduce_daily(&samples);
        assert_eq!(daily[0].temperature_c, 3.0);
        assert_eq!(daily[1].temperature_c, 1.0);
    }

    #[test]
    fn skips_malformed_timestamps() {
        let samples = vec![
            sample("bad", 9.0),
            sample("2026-02-12 12:00:00", 1.0),
            sample("2026-02-13 12:00", 2.0),
        ];
        assert_eq!(reduce_daily(&samples).len(), 1);
    }
}
