//! Unit tests for the estimation engine.

use ta_core::{AdvisorRng, HourOfDay, LocationRegistry};

use crate::{CongestionBand, KEY_HOURS, RouteEstimator, RouteSample, RouteTable, TrafficStatus};

fn hour(h: u8) -> HourOfDay {
    HourOfDay::new(h).unwrap()
}

#[cfg(test)]
mod congestion {
    use super::*;

    #[test]
    fn every_hour_maps_to_its_band() {
        for h in 0..24u8 {
            let band = CongestionBand::for_hour(hour(h));
            let expected = match h {
                7 | 8 | 17 | 18 => CongestionBand::Peak,
                6 | 9 | 16 | 19 => CongestionBand::Shoulder,
                10..=15         => CongestionBand::Midday,
                _               => CongestionBand::OffPeak,
            };
            assert_eq!(band, expected, "hour {h}");
        }
    }

    #[test]
    fn samples_stay_inside_band_bounds() {
        let mut rng = AdvisorRng::new(1);
        for h in 0..24u8 {
            let band = CongestionBand::for_hour(hour(h));
            let (low, high) = band.bounds();
            for _ in 0..200 {
                let c = band.sample(&mut rng);
                assert!((low..high).contains(&c), "hour {h}: {c} outside [{low}, {high})");
                assert!((0.1..0.9).contains(&c));
            }
        }
    }

    #[test]
    fn band_bounds_are_disjoint_and_cover() {
        // Descending, adjacent half-open ranges: [0.7,0.9) [0.5,0.7) [0.3,0.5) [0.1,0.3)
        let bands = [
            CongestionBand::Peak,
            CongestionBand::Shoulder,
            CongestionBand::Midday,
            CongestionBand::OffPeak,
        ];
        for pair in bands.windows(2) {
            let (lo_hi, hi_lo) = (pair[1].bounds().1, pair[0].bounds().0);
            assert_eq!(lo_hi, hi_lo);
        }
    }
}

#[cfg(test)]
mod status {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(TrafficStatus::from_congestion(0.0), TrafficStatus::Low);
        assert_eq!(TrafficStatus::from_congestion(0.29), TrafficStatus::Low);
        assert_eq!(TrafficStatus::from_congestion(0.45), TrafficStatus::Medium);
        assert_eq!(TrafficStatus::from_congestion(0.7), TrafficStatus::High);
        assert_eq!(TrafficStatus::from_congestion(0.95), TrafficStatus::Severe);
    }

    #[test]
    fn boundaries_belong_to_the_higher_band() {
        assert_eq!(TrafficStatus::from_congestion(0.3), TrafficStatus::Medium);
        assert_eq!(TrafficStatus::from_congestion(0.6), TrafficStatus::High);
        assert_eq!(TrafficStatus::from_congestion(0.8), TrafficStatus::Severe);
    }

    #[test]
    fn labels() {
        assert_eq!(TrafficStatus::High.as_str(), "High");
        assert_eq!(TrafficStatus::High.as_lower(), "high");
        assert_eq!(TrafficStatus::Severe.to_string(), "Severe");
    }
}

#[cfg(test)]
mod sample {
    use super::*;
    use crate::emissions;

    /// The worked scenario: Downtown → Airport at 17:00 with congestion 0.78
    /// and distance 24.5 km.
    #[test]
    fn downtown_airport_scenario() {
        let reg = LocationRegistry::demo();
        let src = reg.resolve("Downtown").unwrap();
        let dst = reg.resolve("Airport").unwrap();

        let s = RouteSample::from_parts(src, dst, hour(17), 24.5, 0.78);
        assert_eq!(s.distance_km, 24.5);
        assert_eq!(s.base_time_min, 49.0);
        assert_eq!(s.travel_time_min, 68.1);
        assert_eq!(s.speed_kmh, 21.6);
        assert_eq!(s.traffic_status, TrafficStatus::High);

        let fuel = emissions::fuel_consumption_l(s.distance_km);
        let co2 = emissions::co2_emission_kg(fuel);
        assert!((fuel - 1.96).abs() < 1e-9);
        assert!((co2 - 4.5276).abs() < 1e-9);
    }

    #[test]
    fn travel_time_never_below_base_time() {
        let reg = LocationRegistry::demo();
        let src = reg.resolve("Beach").unwrap();
        let dst = reg.resolve("Waterfront").unwrap();
        let mut rng = AdvisorRng::new(9);
        for h in 0..24u8 {
            for _ in 0..50 {
                let d = rng.gen_range(10.0..40.0);
                let s = RouteSample::draw(src, dst, hour(h), d, &mut rng);
                assert!(
                    s.travel_time_min >= s.base_time_min,
                    "travel {} < base {}",
                    s.travel_time_min,
                    s.base_time_min
                );
                assert!(s.speed_kmh > 0.0);
            }
        }
    }

    #[test]
    fn speed_decreases_with_congestion_at_fixed_distance() {
        let reg = LocationRegistry::demo();
        let src = reg.resolve("Downtown").unwrap();
        let dst = reg.resolve("Airport").unwrap();
        let mut prev_speed = f64::INFINITY;
        for c in [0.1, 0.3, 0.5, 0.7, 0.89] {
            let s = RouteSample::from_parts(src, dst, hour(12), 30.0, c);
            assert!(s.speed_kmh < prev_speed, "speed not monotonic at c={c}");
            prev_speed = s.speed_kmh;
        }
    }

    #[test]
    fn delay_and_percentage_helpers() {
        let reg = LocationRegistry::demo();
        let src = reg.resolve("Downtown").unwrap();
        let dst = reg.resolve("Airport").unwrap();
        let s = RouteSample::from_parts(src, dst, hour(17), 24.5, 0.78);
        assert!((s.delay_min() - 19.1).abs() < 1e-9);
        assert_eq!(s.congestion_pct(), 78);
    }

    #[test]
    fn fuel_and_co2_are_exact_linear_functions() {
        for d in [0.0, 1.0, 24.5, 39.9] {
            let fuel = emissions::fuel_consumption_l(d);
            assert_eq!(fuel, d * 0.08);
            assert_eq!(emissions::co2_emission_kg(fuel), fuel * 2.31);
        }
    }
}

#[cfg(test)]
mod table {
    use super::*;

    #[test]
    fn has_128_directional_entries() {
        let reg = LocationRegistry::demo();
        let table = RouteTable::generate(&reg, 42).unwrap();
        assert_eq!(table.len(), 128);
    }

    #[test]
    fn same_seed_rebuilds_identical_table() {
        let reg = LocationRegistry::demo();
        let t1 = RouteTable::generate(&reg, 42).unwrap();
        let t2 = RouteTable::generate(&reg, 42).unwrap();
        let mut checked = 0;
        for s in t1.iter() {
            let other = t2.get(s.source, s.destination, s.hour).unwrap();
            assert_eq!(s, other);
            checked += 1;
        }
        assert_eq!(checked, 128);
    }

    #[test]
    fn repeated_lookup_returns_the_stored_sample() {
        let reg = LocationRegistry::demo();
        let table = RouteTable::generate(&reg, 7).unwrap();
        let src = reg.resolve("Downtown").unwrap();
        let dst = reg.resolve("Airport").unwrap();
        let first = table.get(src, dst, hour(17)).unwrap().clone();
        for _ in 0..10 {
            assert_eq!(table.get(src, dst, hour(17)).unwrap(), &first);
        }
    }

    #[test]
    fn both_directions_share_one_distance_draw() {
        let reg = LocationRegistry::demo();
        let table = RouteTable::generate(&reg, 3).unwrap();
        let a = reg.resolve("Downtown").unwrap();
        let b = reg.resolve("Airport").unwrap();
        for h in KEY_HOURS {
            let fwd = table.get(a, b, h).unwrap();
            let rev = table.get(b, a, h).unwrap();
            assert_eq!(fwd.distance_km, rev.distance_km);
        }
    }

    #[test]
    fn distances_within_sampling_range() {
        let reg = LocationRegistry::demo();
        let table = RouteTable::generate(&reg, 11).unwrap();
        for s in table.iter() {
            assert!((10.0..40.0).contains(&s.distance_km), "distance {}", s.distance_km);
        }
    }

    #[test]
    fn non_key_hours_are_absent() {
        let reg = LocationRegistry::demo();
        let table = RouteTable::generate(&reg, 5).unwrap();
        let src = reg.resolve("Downtown").unwrap();
        let dst = reg.resolve("Airport").unwrap();
        for h in [0u8, 3, 5, 11, 14, 21, 23] {
            assert!(table.get(src, dst, hour(h)).is_none(), "hour {h} should miss");
        }
    }
}

#[cfg(test)]
mod estimator {
    use super::*;

    fn estimator(seed: u64) -> (LocationRegistry, RouteEstimator) {
        let reg = LocationRegistry::demo();
        let table = RouteTable::generate(&reg, seed).unwrap();
        (reg, RouteEstimator::new(table))
    }

    #[test]
    fn cached_triple_is_stable_across_calls() {
        let (reg, est) = estimator(42);
        let src = reg.resolve("Downtown").unwrap();
        let dst = reg.resolve("Airport").unwrap();
        let mut rng = AdvisorRng::new(0);

        let first = est.estimate(src, dst, hour(17), &mut rng);
        assert!(first.cached);
        for _ in 0..5 {
            let again = est.estimate(src, dst, hour(17), &mut rng);
            assert_eq!(again.primary.distance_km, first.primary.distance_km);
            assert_eq!(again.primary.congestion_level, first.primary.congestion_level);
        }
    }

    #[test]
    fn on_demand_path_resamples_per_call() {
        let (reg, est) = estimator(42);
        let src = reg.resolve("Beach").unwrap();
        let dst = reg.resolve("Waterfront").unwrap();
        let mut rng = AdvisorRng::new(0);

        // Not a table pair: three draws all identical is as good as impossible.
        let draws: Vec<(f64, f64)> = (0..3)
            .map(|_| {
                let e = est.estimate(src, dst, hour(3), &mut rng);
                assert!(!e.cached);
                (e.primary.distance_km, e.primary.congestion_level)
            })
            .collect();
        assert!(!(draws[0] == draws[1] && draws[1] == draws[2]));
    }

    #[test]
    fn alternatives_wrap_around_midnight() {
        let (reg, est) = estimator(1);
        let src = reg.resolve("Beach").unwrap();
        let dst = reg.resolve("Waterfront").unwrap();
        let mut rng = AdvisorRng::new(0);

        let at_midnight = est.estimate(src, dst, hour(0), &mut rng);
        assert_eq!(at_midnight.alternatives[0].hour.get(), 23);
        assert_eq!(at_midnight.alternatives[1].hour.get(), 1);

        let at_23 = est.estimate(src, dst, hour(23), &mut rng);
        assert_eq!(at_23.alternatives[0].hour.get(), 22);
        assert_eq!(at_23.alternatives[1].hour.get(), 0);
    }

    #[test]
    fn alternatives_share_the_primary_base_time() {
        let (reg, est) = estimator(13);
        let src = reg.resolve("Downtown").unwrap();
        let dst = reg.resolve("Airport").unwrap();
        let mut rng = AdvisorRng::new(99);

        let e = est.estimate(src, dst, hour(17), &mut rng);
        for alt in &e.alternatives {
            // Reconstruct from the primary's base time and the reported congestion.
            let expected =
                ((e.primary.base_time_min * (1.0 + alt.congestion_level * 0.5)) * 10.0).round()
                    / 10.0;
            assert_eq!(alt.travel_time_min, expected);
            assert_eq!(
                alt.traffic_status,
                TrafficStatus::from_congestion(alt.congestion_level)
            );
        }
    }

    #[test]
    fn environmental_figures_follow_the_primary_distance() {
        let (reg, est) = estimator(8);
        let src = reg.resolve("Downtown").unwrap();
        let dst = reg.resolve("University").unwrap();
        let mut rng = AdvisorRng::new(2);

        let e = est.estimate(src, dst, hour(8), &mut rng);
        assert_eq!(e.fuel_l, e.primary.distance_km * 0.08);
        assert_eq!(e.co2_kg, e.fuel_l * 2.31);
    }

    #[test]
    fn fixed_rng_stream_reproduces_the_estimate() {
        let (reg, est) = estimator(42);
        let src = reg.resolve("Beach").unwrap();
        let dst = reg.resolve("Waterfront").unwrap();

        let mut rng_a = AdvisorRng::new(1234);
        let mut rng_b = AdvisorRng::new(1234);
        let a = est.estimate(src, dst, hour(5), &mut rng_a);
        let b = est.estimate(src, dst, hour(5), &mut rng_b);
        assert_eq!(a, b);
    }
}
