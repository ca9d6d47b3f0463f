//! Unit tests for the aircraft entity and emergency sampler.

#[cfg(test)]
mod ids {
    use crate::{AircraftId, FlightDirection};

    #[test]
    fn display_uses_direction_prefix() {
        assert_eq!(AircraftId::inbound(1).to_string(), "I1");
        assert_eq!(AircraftId::outbound(42).to_string(), "O42");
        assert_eq!(FlightDirection::Outbound.to_string(), "OUTBOUND");
    }

    #[test]
    fn ordering_is_direction_then_seq() {
        assert!(AircraftId::inbound(2) < AircraftId::inbound(10));
        assert!(AircraftId::inbound(99) < AircraftId::outbound(1));
    }
}

#[cfg(test)]
mod aircraft {
    use atc_core::SimTime;

    use crate::{Aircraft, AircraftError, AircraftId, EmergencyKind};

    fn inbound(seq: u32, fuel: u32) -> Aircraft {
        Aircraft::new(AircraftId::inbound(seq), SimTime(10), SimTime(12), fuel)
    }

    #[test]
    fn admit_stamps_only_matching_field() {
        let mut a = inbound(1, 40);
        assert_eq!(a.admitted_at(), None);
        a.admit(SimTime(12)).unwrap();
        assert_eq!(a.entered_holding_at(), Some(SimTime(12)));
        assert_eq!(a.joined_takeoff_queue_at(), None);

        let mut d = Aircraft::new(AircraftId::outbound(1), SimTime(0), SimTime(3), 0);
        d.admit(SimTime(3)).unwrap();
        assert_eq!(d.joined_takeoff_queue_at(), Some(SimTime(3)));
        assert_eq!(d.entered_holding_at(), None);
    }

    #[test]
    fn admit_twice_fails() {
        let mut a = inbound(1, 40);
        a.admit(SimTime(12)).unwrap();
        assert_eq!(
            a.admit(SimTime(20)),
            Err(AircraftError::AlreadyAdmitted(AircraftId::inbound(1)))
        );
        assert_eq!(a.entered_holding_at(), Some(SimTime(12)));
    }

    #[test]
    fn emergency_declared_once() {
        let mut a = inbound(3, 40);
        assert!(!a.is_emergency());
        a.declare_emergency(EmergencyKind::PassengerIllness).unwrap();
        assert!(a.is_emergency());
        assert!(a.declare_emergency(EmergencyKind::FuelEmergency).is_err());
        assert_eq!(a.emergency(), Some(EmergencyKind::PassengerIllness));
    }

    #[test]
    fn burn_fuel_saturates() {
        let mut a = inbound(1, 7);
        assert_eq!(a.burn_fuel(5), 2);
        assert_eq!(a.burn_fuel(5), 0);
        assert_eq!(a.fuel_remaining(), 0);
    }

    #[test]
    fn queued_minutes() {
        let mut a = inbound(1, 7);
        assert_eq!(a.queued_minutes(SimTime(50)), 0);
        a.admit(SimTime(12)).unwrap();
        assert_eq!(a.queued_minutes(SimTime(50)), 38);
    }
}

#[cfg(test)]
mod sampler {
    use atc_core::{SimRng, SimTime};

    use crate::{Aircraft, AircraftId, EmergencyKind, EmergencySampler};

    fn batch(n: u32) -> Vec<Aircraft> {
        (1..=n)
            .map(|i| Aircraft::new(AircraftId::inbound(i), SimTime(0), SimTime(0), 30))
            .collect()
    }

    #[test]
    fn kind_thresholds() {
        let s = EmergencySampler::new(0.2, 0.3, 1);
        assert_eq!(s.kind_for(0.0), EmergencyKind::MechanicalFailure);
        assert_eq!(s.kind_for(0.19), EmergencyKind::MechanicalFailure);
        assert_eq!(s.kind_for(0.2), EmergencyKind::PassengerIllness);
        assert_eq!(s.kind_for(0.49), EmergencyKind::PassengerIllness);
        assert_eq!(s.kind_for(0.5), EmergencyKind::FuelEmergency);
    }

    #[test]
    fn applies_at_most_cap() {
        let s = EmergencySampler::new(0.5, 0.5, 2);
        let mut rng = SimRng::new(9);
        let mut created = batch(5);
        assert_eq!(s.apply(&mut created, &mut rng).unwrap(), 2);
        assert_eq!(created.iter().filter(|a| a.is_emergency()).count(), 2);
    }

    #[test]
    fn cap_larger_than_batch_marks_all() {
        let s = EmergencySampler::new(1.0, 0.0, 10);
        let mut rng = SimRng::new(9);
        let mut created = batch(3);
        assert_eq!(s.apply(&mut created, &mut rng).unwrap(), 3);
        assert!(created.iter().all(|a| a.emergency() == Some(EmergencyKind::MechanicalFailure)));
    }

    #[test]
    fn zero_cap_or_empty_batch_is_noop() {
        let mut rng = SimRng::new(9);
        let mut created = batch(3);
        assert_eq!(EmergencySampler::new(1.0, 0.0, 0).apply(&mut created, &mut rng).unwrap(), 0);
        assert_eq!(EmergencySampler::new(1.0, 0.0, 4).apply(&mut [], &mut rng).unwrap(), 0);
        assert!(created.iter().all(|a| !a.is_emergency()));
    }

    #[test]
    fn zero_mechanical_and_illness_means_fuel() {
        let s = EmergencySampler::new(0.0, 0.0, 3);
        let mut rng = SimRng::new(4);
        let mut created = batch(3);
        s.apply(&mut created, &mut rng).unwrap();
        assert!(created.iter().all(|a| a.emergency() == Some(EmergencyKind::FuelEmergency)));
    }
}
