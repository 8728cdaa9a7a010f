//! Randomised sample data standing in for a real weather feed.
//!
//! Values are only reproducible in distribution. Callers that need repeatable output pass a
//! seeded RNG and a fixed clock to [`generate`].

use chrono::{DateTime, Days, Duration, Local, Utc};
use rand::Rng;

use crate::model::{
    Condition, CurrentConditions, DailyForecast, HourlyForecast, Severity, WeatherAlert,
    WeatherSnapshot,
};

pub const FORECAST_DAYS: usize = 5;
pub const HOURS_PER_DAY: usize = 24;

const ALERT_PROBABILITY: f64 = 0.3;
const ALERT_LIFETIME_HOURS: i64 = 6;

/// Builds a complete snapshot for `location` using `rng` for every value.
pub fn generate<R: Rng + ?Sized>(
    location: &str,
    now: DateTime<Local>,
    rng: &mut R,
) -> WeatherSnapshot {
    let condition = random_condition(rng);
    let base_temp = rng.gen_range(50..90);

    let current = CurrentConditions {
        location: location.to_string(),
        temperature: base_temp,
        feels_like: base_temp + jitter(rng, 5),
        condition,
        humidity_pct: rng.gen_range(40..80),
        wind_speed_mph: rng.gen_range(5..25),
        pressure_mb: rng.gen_range(1000..1100),
        visibility_mi: rng.gen_range(5..10),
        uv_index: rng.gen_range(1..11),
    };

    let today = now.date_naive();
    let forecast = (1..=FORECAST_DAYS as u64)
        .map(|offset| {
            let day_temp = base_temp + jitter(rng, 10);
            // high and low are perturbed independently; a day may come out with low > high.
            DailyForecast {
                date: today + Days::new(offset),
                high: day_temp + rng.gen_range(0..10),
                low: day_temp - rng.gen_range(0..15),
                condition: random_condition(rng),
                precipitation_pct: rng.gen_range(0..80),
                humidity_pct: rng.gen_range(40..80),
                wind_speed_mph: rng.gen_range(5..25),
            }
        })
        .collect();

    let hourly = (0..HOURS_PER_DAY as u8)
        .map(|hour| HourlyForecast {
            hour,
            temperature: base_temp + jitter(rng, 8),
            condition: random_condition(rng),
            precipitation_pct: rng.gen_range(0..100),
        })
        .collect();

    let generated_at = now.with_timezone(&Utc);
    let alerts = if rng.gen_bool(ALERT_PROBABILITY) {
        vec![WeatherAlert {
            id: "1".to_string(),
            title: "Severe Weather Warning".to_string(),
            description: "Heavy rain and thunderstorms expected in your area. \
                          Take necessary precautions."
                .to_string(),
            severity: Severity::High,
            expires: generated_at + Duration::hours(ALERT_LIFETIME_HOURS),
        }]
    } else {
        Vec::new()
    };

    WeatherSnapshot {
        current,
        forecast,
        hourly,
        alerts,
        generated_at,
    }
}

/// [`generate`] over the thread-local RNG and the wall clock.
pub fn generate_snapshot(location: &str) -> WeatherSnapshot {
    generate(location, Local::now(), &mut rand::thread_rng())
}

fn random_condition<R: Rng + ?Sized>(rng: &mut R) -> Condition {
    Condition::ALL[rng.gen_range(0..Condition::ALL.len())]
}

/// Signed offset in `-(max - 1)..=(max - 1)`, sign and magnitude drawn separately.
fn jitter<R: Rng + ?Sized>(rng: &mut R, max: i32) -> i32 {
    let magnitude = rng.gen_range(0..max);
    if rng.gen_bool(0.5) { magnitude } else { -magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::{SeedableRng, rngs::StdRng};

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 5, 30, 9, 15, 0).unwrap()
    }

    fn samples(count: u64) -> impl Iterator<Item = WeatherSnapshot> {
        (0..count).map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate("Boston", fixed_now(), &mut rng)
        })
    }

    #[test]
    fn snapshot_shape() {
        for snap in samples(200) {
            assert_eq!(snap.forecast.len(), FORECAST_DAYS);
            assert_eq!(snap.hourly.len(), HOURS_PER_DAY);
            assert!(snap.alerts.len() <= 1);
            assert_eq!(snap.location(), "Boston");
        }
    }

    #[test]
    fn current_conditions_stay_in_range() {
        for snap in samples(500) {
            let c = &snap.current;
            assert!((50..=89).contains(&c.temperature));
            assert!((c.feels_like - c.temperature).abs() <= 4);
            assert!((40..=79).contains(&c.humidity_pct));
            assert!((5..=24).contains(&c.wind_speed_mph));
            assert!((1000..=1099).contains(&c.pressure_mb));
            assert!((5..=9).contains(&c.visibility_mi));
            assert!((1..=10).contains(&c.uv_index));
        }
    }

    #[test]
    fn forecast_days_stay_in_range() {
        for snap in samples(300) {
            let base = snap.current.temperature;
            for day in &snap.forecast {
                assert!(day.high >= base - 9 && day.high <= base + 18);
                assert!(day.low >= base - 23 && day.low <= base + 9);
                assert!(day.precipitation_pct <= 79);
                assert!((40..=79).contains(&day.humidity_pct));
                assert!((5..=24).contains(&day.wind_speed_mph));
            }
        }
    }

    #[test]
    fn forecast_dates_start_tomorrow() {
        let snap = samples(1).next().unwrap();
        let today = fixed_now().date_naive();
        for (i, day) in snap.forecast.iter().enumerate() {
            assert_eq!(day.date, today + Days::new(i as u64 + 1));
        }
    }

    #[test]
    fn hourly_entries_are_ordered_and_bounded() {
        for snap in samples(300) {
            let base = snap.current.temperature;
            for (i, hour) in snap.hourly.iter().enumerate() {
                assert_eq!(hour.hour as usize, i);
                assert!((hour.temperature - base).abs() <= 7);
                assert!(hour.precipitation_pct <= 99);
            }
            assert_eq!(snap.hourly[0].label(), "0:00");
            assert_eq!(snap.hourly[23].label(), "23:00");
        }
    }

    #[test]
    fn alerts_are_high_and_expire_after_six_hours() {
        let mut with_alert = 0;
        for snap in samples(400) {
            if let Some(alert) = snap.alerts.first() {
                with_alert += 1;
                assert_eq!(alert.severity, Severity::High);
                assert_eq!(alert.title, "Severe Weather Warning");
                assert_eq!(alert.expires - snap.generated_at, Duration::hours(6));
            }
        }
        // roughly 30% of 400
        assert!(with_alert > 60 && with_alert < 180, "got {with_alert} alerts");
    }

    #[test]
    fn same_seed_same_snapshot() {
        let a = generate("Paris", fixed_now(), &mut StdRng::seed_from_u64(7));
        let b = generate("Paris", fixed_now(), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_is_symmetric_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<i32> = (0..1000).map(|_| jitter(&mut rng, 5)).collect();
        assert!(draws.iter().all(|d| d.abs() <= 4));
        assert!(draws.iter().any(|d| *d < 0));
        assert!(draws.iter().any(|d| *d > 0));
    }
}
