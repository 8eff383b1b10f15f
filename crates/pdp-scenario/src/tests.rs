//! Unit tests for pdp-scenario.

use pdp_core::{DistanceUnit, ParcelDto, Point, SpeedUnit, Tick, TimeUnit, TimeWindow, VehicleDto};

use crate::{
    EventKind, ProblemClass, RoadDescriptor, Scenario, ScenarioBuilder, StatsDescriptor,
    StopCondition, TaskDescriptor, TimeDescriptor, TimedEvent,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn vehicle(speed: f64) -> VehicleDto {
    VehicleDto::new(Point::new(5.0, 5.0), speed, 4, TimeWindow::ALWAYS)
}

/// A parcel event whose pickup x-coordinate doubles as a tag.
fn tagged_parcel(time: u64, tag: f64) -> TimedEvent {
    let p = ParcelDto::new(Point::new(tag, 0.0), Point::new(0.0, 0.0)).with_announce_time(Tick(time));
    TimedEvent::parcel(p)
}

fn tag_of(e: &TimedEvent) -> f64 {
    match e.kind {
        EventKind::AddParcel(p) => p.pickup_location.x,
        _ => panic!("not a parcel event: {e}"),
    }
}

fn builder() -> ScenarioBuilder {
    Scenario::builder(
        ProblemClass::FABRI_RECHT,
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        vehicle(1.0),
    )
}

fn road(min: Point, max: Point) -> RoadDescriptor {
    RoadDescriptor::plane(min, max, DistanceUnit::Kilometre, 1.0, SpeedUnit::KILOMETRES_PER_HOUR)
        .unwrap()
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;
    use crate::EventQueue;

    #[test]
    fn orders_by_time_then_insertion() {
        // Times [5, 0, 5, 3]; tags identify insertion order.
        let scenario = builder()
            .events([
                tagged_parcel(5, 1.0),
                tagged_parcel(0, 2.0),
                tagged_parcel(5, 3.0),
                tagged_parcel(3, 4.0),
            ])
            .build()
            .unwrap();

        let out: Vec<TimedEvent> = scenario.as_queue().collect();
        let times: Vec<u64> = out.iter().map(|e| e.time.0).collect();
        assert_eq!(times, vec![0, 3, 5, 5]);
        // The two time-5 events keep their relative order.
        assert_eq!(tag_of(&out[2]), 1.0);
        assert_eq!(tag_of(&out[3]), 3.0);
    }

    #[test]
    fn empty_scenario_gives_exhausted_queue() {
        let scenario = builder().build().unwrap();
        let mut q = scenario.as_queue();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.next_time().is_none());
        assert!(q.pop().is_none());
        assert!(q.pop_due(Tick::MAX).is_empty());
    }

    #[test]
    fn derived_queues_are_independent() {
        let scenario = builder()
            .events([tagged_parcel(1, 1.0), tagged_parcel(2, 2.0)])
            .build()
            .unwrap();
        let snapshot = scenario.clone();

        let mut q1 = scenario.as_queue();
        let q2 = scenario.as_queue();
        assert_eq!(q1, q2);

        q1.pop();
        assert_eq!(q1.len(), 1);
        assert_eq!(q2.len(), 2);
        assert_eq!(scenario, snapshot);
        assert_eq!(scenario.events().len(), 2);

        // A third queue still sees everything, in the same order.
        let again: Vec<TimedEvent> = scenario.as_queue().collect();
        let first: Vec<TimedEvent> = q2.collect();
        assert_eq!(again, first);
    }

    #[test]
    fn pop_due_drains_up_to_now() {
        let mut q = EventQueue::new([
            tagged_parcel(4, 1.0),
            tagged_parcel(1, 2.0),
            tagged_parcel(4, 3.0),
            tagged_parcel(9, 4.0),
        ]);
        assert_eq!(q.next_time(), Some(Tick(1)));

        let due = q.pop_due(Tick(0));
        assert!(due.is_empty());

        let due = q.pop_due(Tick(4));
        let tags: Vec<f64> = due.iter().map(tag_of).collect();
        assert_eq!(tags, vec![2.0, 1.0, 3.0]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.peek().map(|e| e.time), Some(Tick(9)));
    }

    #[test]
    fn exact_size_iteration() {
        let q = EventQueue::new([TimedEvent::time_out(Tick(3)), TimedEvent::time_out(Tick(2))]);
        assert_eq!(q.len(), 2);
        assert_eq!(q.size_hint(), (2, Some(2)));
    }
}

// ── Scenario construction ─────────────────────────────────────────────────────

#[cfg(test)]
mod scenario {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;
    use crate::{Axis, Facet, ScenarioError};

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    fn full() -> ScenarioBuilder {
        let tw = TimeWindow::new(Tick(0), Tick(480)).unwrap();
        builder()
            .events([tagged_parcel(3, 1.0), TimedEvent::time_out(Tick(480))])
            .time_window(tw)
            .descriptor(TimeDescriptor::new(1, TimeUnit::Minute).unwrap())
            .descriptor(road(Point::new(0.0, 0.0), Point::new(10.0, 10.0)))
            .descriptor(TaskDescriptor::default())
            .descriptor(StatsDescriptor)
            .stop_condition(StopCondition::TimeOutEvent.or(StopCondition::AtTick(Tick(500))))
            .instance_id("inst-7")
    }

    #[test]
    fn accessors_return_supplied_values() {
        let s = full().build().unwrap();
        assert_eq!(s.spatial_min(), Point::new(0.0, 0.0));
        assert_eq!(s.spatial_max(), Point::new(10.0, 10.0));
        assert_eq!(s.time_window(), TimeWindow::new(Tick(0), Tick(480)).unwrap());
        assert_eq!(*s.default_vehicle(), vehicle(1.0));
        assert_eq!(s.problem_class(), ProblemClass::FABRI_RECHT);
        assert_eq!(s.instance_id(), "inst-7");
        assert_eq!(
            *s.stop_condition(),
            StopCondition::Any(vec![StopCondition::TimeOutEvent, StopCondition::AtTick(Tick(500))])
        );
        assert!(s.environment_descriptors().is_complete());
        assert_eq!(s.environment_descriptors().time().unwrap().tick_length_ms(), 60_000);
        assert_eq!(s.events().len(), 2);
    }

    #[test]
    fn defaults() {
        let s = builder().build().unwrap();
        assert_eq!(s.instance_id(), "1");
        assert_eq!(*s.stop_condition(), StopCondition::TimeOutEvent);
        assert_eq!(s.time_window(), TimeWindow::ALWAYS);
        assert!(s.environment_descriptors().is_empty());
        assert_eq!(s.environment_descriptors().missing_facets(), Facet::ALL.to_vec());
    }

    #[test]
    fn inverted_x_bounds_rejected() {
        let err = Scenario::builder(
            ProblemClass::FABRI_RECHT,
            Point::new(5.0, 0.0),
            Point::new(1.0, 10.0),
            vehicle(1.0),
        )
        .build()
        .unwrap_err();
        assert_eq!(err, ScenarioError::InvertedBounds { axis: Axis::X, min: 5.0, max: 1.0 });
    }

    #[test]
    fn inverted_y_bounds_rejected() {
        let err = Scenario::builder(
            ProblemClass::FABRI_RECHT,
            Point::new(0.0, 3.0),
            Point::new(1.0, 2.0),
            vehicle(1.0),
        )
        .build()
        .unwrap_err();
        assert!(matches!(err, ScenarioError::InvertedBounds { axis: Axis::Y, .. }));
        assert!(err.to_string().contains("y axis"));
    }

    #[test]
    fn degenerate_bounds_allowed() {
        let p = Point::new(2.0, 2.0);
        assert!(Scenario::builder(ProblemClass::GENERATED, p, p, vehicle(1.0)).build().is_ok());
    }

    #[test]
    fn nan_bounds_rejected() {
        let err = Scenario::builder(
            ProblemClass::FABRI_RECHT,
            Point::new(f64::NAN, 0.0),
            Point::new(1.0, 1.0),
            vehicle(1.0),
        )
        .build()
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Core(_)));
    }

    #[test]
    fn non_positive_speed_rejected() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Scenario::builder(
                ProblemClass::FABRI_RECHT,
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                vehicle(speed),
            )
            .build()
            .unwrap_err();
            assert!(matches!(err, ScenarioError::NonPositiveSpeed(_)), "speed {speed}: {err}");
        }
    }

    #[test]
    fn duplicate_facet_rejected() {
        let err = builder()
            .descriptor(TimeDescriptor::new(1, TimeUnit::Minute).unwrap())
            .descriptor(TimeDescriptor::new(1, TimeUnit::Second).unwrap())
            .build()
            .unwrap_err();
        assert_eq!(err, ScenarioError::DuplicateFacet(Facet::Time));
        assert!(err.to_string().contains("time"));
    }

    #[test]
    fn contradicting_road_bounds_rejected() {
        let err = builder()
            .descriptor(road(Point::new(0.0, 0.0), Point::new(20.0, 10.0)))
            .build()
            .unwrap_err();
        assert!(matches!(err, ScenarioError::RoadBoundsMismatch { .. }));
    }

    #[test]
    fn equal_inputs_give_equal_scenarios() {
        let a = full().build().unwrap();
        let b = full().build().unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn descriptor_order_does_not_matter() {
        let a = builder()
            .descriptor(StatsDescriptor)
            .descriptor(TaskDescriptor::default())
            .build()
            .unwrap();
        let b = builder()
            .descriptor(TaskDescriptor::default())
            .descriptor(StatsDescriptor)
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn any_field_change_breaks_equality() {
        let base = full().build().unwrap();
        assert_ne!(base, full().instance_id("inst-8").build().unwrap());
        assert_ne!(base, full().stop_condition(StopCondition::TimeOutEvent).build().unwrap());
        assert_ne!(base, full().event(TimedEvent::time_out(Tick(1))).build().unwrap());
        let other_class = Scenario::builder(
            ProblemClass::GENDREAU06,
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            vehicle(1.0),
        )
        .build()
        .unwrap();
        assert_ne!(builder().build().unwrap(), other_class);
    }

    #[test]
    fn scenario_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scenario>();
    }
}

// ── Descriptors and policies ──────────────────────────────────────────────────

#[cfg(test)]
mod descriptor {
    use super::*;
    use crate::{EnvironmentDescriptor, EnvironmentDescriptors, Facet, ScenarioError, TimeWindowPolicy};

    #[test]
    fn time_descriptor_is_canonical_ms() {
        let d = TimeDescriptor::new(2, TimeUnit::Second).unwrap();
        assert_eq!(d.tick_length_ms(), 2_000);
        assert_eq!(d.elapsed_ms(Tick(3)), 6_000);
        assert_eq!(TimeDescriptor::new(0, TimeUnit::Hour), Err(ScenarioError::ZeroTickLength));
    }

    #[test]
    fn road_speed_is_canonical_mps() {
        let r = RoadDescriptor::plane(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            DistanceUnit::Kilometre,
            100.0,
            SpeedUnit::KILOMETRES_PER_MINUTE,
        )
        .unwrap();
        let expected = 100.0 * 1_000.0 / 60.0;
        assert!((r.max_speed_mps() - expected).abs() < 1e-9);
    }

    #[test]
    fn road_rejects_zero_speed() {
        let err = RoadDescriptor::plane(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            DistanceUnit::Metre,
            0.0,
            SpeedUnit::METRES_PER_SECOND,
        )
        .unwrap_err();
        assert_eq!(err, ScenarioError::NonPositiveMaxSpeed(0.0));
    }

    #[test]
    fn set_lookup_by_facet() {
        let set = EnvironmentDescriptors::new([
            EnvironmentDescriptor::from(StatsDescriptor),
            EnvironmentDescriptor::from(TaskDescriptor { time_window_policy: TimeWindowPolicy::Strict }),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.time().is_none());
        assert_eq!(set.task_handling().unwrap().time_window_policy, TimeWindowPolicy::Strict);
        assert_eq!(set.missing_facets(), vec![Facet::Time, Facet::Road]);
        let facets: Vec<Facet> = set.iter().map(|d| d.facet()).collect();
        assert_eq!(facets, vec![Facet::TaskHandling, Facet::Statistics]);
    }

    #[test]
    fn policies() {
        let tw = TimeWindow::new(Tick(10), Tick(20)).unwrap();

        assert!(TimeWindowPolicy::Liberal.can_pickup(tw, Tick(0), 100));

        assert!(TimeWindowPolicy::Strict.can_pickup(tw, Tick(10), 10));
        assert!(!TimeWindowPolicy::Strict.can_pickup(tw, Tick(15), 10));
        assert!(!TimeWindowPolicy::Strict.can_deliver(tw, Tick(9), 0));

        assert!(!TimeWindowPolicy::TardyAllowed.can_deliver(tw, Tick(9), 0));
        assert!(TimeWindowPolicy::TardyAllowed.can_deliver(tw, Tick(25), 5));
    }
}

// ── Stop conditions ───────────────────────────────────────────────────────────

#[cfg(test)]
mod stop {
    use super::*;
    use crate::RunSnapshot;

    fn snapshot() -> RunSnapshot {
        RunSnapshot {
            now:               Tick(10),
            time_out_seen:     false,
            total_parcels:     3,
            delivered_parcels: 3,
            total_vehicles:    2,
            idle_vehicles:     2,
            vehicles_at_depot: 1,
            tardiness:         0,
        }
    }

    #[test]
    fn leaf_conditions() {
        let s = snapshot();
        assert!(!StopCondition::TimeOutEvent.should_stop(&s));
        assert!(StopCondition::AtTick(Tick(10)).should_stop(&s));
        assert!(!StopCondition::AtTick(Tick(11)).should_stop(&s));
        assert!(StopCondition::TasksServedAndIdle.should_stop(&s));
        assert!(!StopCondition::VehiclesDoneAndBackAtDepot.should_stop(&s));
        assert!(!StopCondition::AnyTardiness.should_stop(&s));

        let busy = RunSnapshot { delivered_parcels: 2, ..s };
        assert!(!StopCondition::TasksServedAndIdle.should_stop(&busy));
    }

    #[test]
    fn composites() {
        let s = snapshot();
        let timeout_or_served = StopCondition::TimeOutEvent.or(StopCondition::TasksServedAndIdle);
        assert!(timeout_or_served.should_stop(&s));

        let timeout_and_served = StopCondition::TimeOutEvent.and(StopCondition::TasksServedAndIdle);
        assert!(!timeout_and_served.should_stop(&s));
        assert!(timeout_and_served.should_stop(&RunSnapshot { time_out_seen: true, ..s }));

        assert!((!StopCondition::AnyTardiness).should_stop(&s));
        assert_eq!(!!StopCondition::AnyTardiness, StopCondition::AnyTardiness);

        assert!(!StopCondition::never().should_stop(&s));
        assert!(StopCondition::All(vec![]).should_stop(&s));
    }

    #[test]
    fn or_flattens() {
        let c = StopCondition::TimeOutEvent
            .or(StopCondition::AnyTardiness)
            .or(StopCondition::AtTick(Tick(5)));
        assert_eq!(
            c,
            StopCondition::Any(vec![
                StopCondition::TimeOutEvent,
                StopCondition::AnyTardiness,
                StopCondition::AtTick(Tick(5)),
            ])
        );
        assert_eq!(c.to_string(), "(time_out_event or any_tardiness or at_tick(5))");
    }

    #[test]
    fn referentially_transparent() {
        let c = StopCondition::TimeOutEvent.or(StopCondition::TasksServedAndIdle);
        let s = snapshot();
        let first = c.should_stop(&s);
        for _ in 0..10 {
            assert_eq!(c.should_stop(&s), first);
        }
    }
}

// ── Problem classes and families ──────────────────────────────────────────────

#[cfg(test)]
mod families {
    use super::*;
    use crate::{Facet, GeneratorConfig, TimeWindowPolicy, fabri_recht, generate};

    #[test]
    fn problem_class_identity_is_key_equality() {
        assert_eq!(ProblemClass::from_id("fabrirecht"), Some(ProblemClass::FABRI_RECHT));
        assert_eq!(ProblemClass::new("fabrirecht"), ProblemClass::FABRI_RECHT);
        assert_eq!(ProblemClass::from_id("nope"), None);
        assert_eq!(ProblemClass::GENDREAU06.to_string(), "gendreau06");
    }

    #[test]
    fn fabri_recht_environment() {
        let tw = TimeWindow::new(Tick(0), Tick(1_000)).unwrap();
        let s = fabri_recht(
            [TimedEvent::time_out(Tick(1_000))],
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            tw,
            vehicle(1.0),
        )
        .unwrap();

        assert_eq!(s.problem_class(), ProblemClass::FABRI_RECHT);
        assert_eq!(s.instance_id(), "1");
        assert_eq!(*s.stop_condition(), StopCondition::TimeOutEvent);

        let env = s.environment_descriptors();
        assert!(env.missing_facets().is_empty());
        assert_eq!(env.time().unwrap().tick_length_ms(), 60_000);
        assert_eq!(env.road().unwrap().distance_unit(), DistanceUnit::Kilometre);
        assert_eq!(
            env.get(Facet::TaskHandling).map(|d| d.facet()),
            Some(Facet::TaskHandling)
        );
        assert_eq!(env.task_handling().unwrap().time_window_policy, TimeWindowPolicy::TardyAllowed);
    }

    #[test]
    fn fabri_recht_validates() {
        let err = fabri_recht(
            Vec::<TimedEvent>::new(),
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            TimeWindow::ALWAYS,
            vehicle(0.0),
        );
        assert!(err.is_err());
    }

    #[test]
    fn generator_is_deterministic() {
        let cfg = GeneratorConfig::default();
        let a = generate(&cfg, 42).unwrap();
        let b = generate(&cfg, 42).unwrap();
        let c = generate(&cfg, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.instance_id(), "seed-42");
        assert_eq!(a.problem_class(), ProblemClass::GENERATED);
    }

    #[test]
    fn generator_layout() {
        let cfg = GeneratorConfig { parcels: 15, vehicles: 3, ..GeneratorConfig::default() };
        let s = generate(&cfg, 7).unwrap();
        assert_eq!(s.events().len(), 15 + 3 + 2);

        let parcels: Vec<ParcelDto> = s
            .events()
            .iter()
            .filter_map(|e| match e.kind {
                EventKind::AddParcel(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(parcels.len(), 15);
        for p in &parcels {
            assert!(p.pickup_location.within(cfg.min, cfg.max));
            assert!(p.delivery_location.within(cfg.min, cfg.max));
            assert!(p.announce_time.0 <= cfg.horizon.0 / 2);
            assert_eq!(p.pickup_window.begin(), p.announce_time);
            assert_eq!(p.delivery_window.begin(), p.pickup_window.end());
        }

        let last = s.events().last().unwrap();
        assert_eq!(last.kind, EventKind::TimeOut);
        assert_eq!(last.time, cfg.horizon);
        assert!(s.environment_descriptors().is_complete());
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde_validation {
    use super::*;

    #[test]
    fn zero_tick_length_does_not_deserialize() {
        assert!(serde_json::from_str::<TimeDescriptor>(r#"{"tick_length_ms":0}"#).is_err());
        let d: TimeDescriptor = serde_json::from_str(r#"{"tick_length_ms":60000}"#).unwrap();
        assert_eq!(d, TimeDescriptor::new(1, TimeUnit::Minute).unwrap());
    }

    #[test]
    fn bad_max_speed_does_not_deserialize() {
        let json = |speed: &str| {
            format!(
                r#"{{"min":{{"x":0.0,"y":0.0}},"max":{{"x":10.0,"y":10.0}},"distance_unit":"Kilometre","max_speed_mps":{speed}}}"#
            )
        };
        assert!(serde_json::from_str::<RoadDescriptor>(&json("-1.0")).is_err());
        assert!(serde_json::from_str::<RoadDescriptor>(&json("0.0")).is_err());
        assert!(serde_json::from_str::<RoadDescriptor>(&json("null")).is_err());
    }

    #[test]
    fn road_survives_json() {
        let r = road(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let json = serde_json::to_string(&r).unwrap();
        let back: RoadDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
