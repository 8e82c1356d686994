use irclimate2mqtt::{
    climate::{FanMode, Mode, Thermostat},
    ir::{CommandSet, CommandTable, CoolTables, Model, TableKind, TemperatureRange, Waveform},
    transmit::{DeviceSession, RetryPolicy, TransmitError, Transmitter},
};


/// Device session that fails the first `failures` transmissions with `error`.
#[derive(Default)]
struct StubSession {
    failures: usize,
    error: Option<TransmitError>,
    sent: Vec<Waveform>,
    attempts: usize,
    authentications: usize,
}

impl StubSession {
    fn failing(failures: usize, error: TransmitError) -> Self {
        Self { failures, error: Some(error), ..Default::default() }
    }
}

impl DeviceSession for StubSession {
    async fn authenticate(&mut self) -> Result<(), TransmitError> {
        self.authentications += 1;
        Ok(())
    }

    async fn transmit(&mut self, waveform: &Waveform) -> Result<(), TransmitError> {
        self.attempts += 1;

        if self.attempts <= self.failures {
            if let Some(error) = &self.error {
                return Err(error.clone());
            }
        }

        self.sent.push(waveform.clone());
        Ok(())
    }
}


fn code(tag: u8, index: u8) -> Waveform {
    Waveform::new(vec![0x26, 0x00, 0x02, 0x00, tag, index]).unwrap()
}

fn table(kind: TableKind, range: TemperatureRange, tag: u8) -> CommandTable {
    CommandTable::new(kind, range, (0..range.len() as u8).map(|i| code(tag, i)).collect()).unwrap()
}

/// Revised layout: fan and dehumidification codes, cool recorded per fan speed.
fn revised() -> CommandSet {
    let range = TemperatureRange::new(16, 30).unwrap();

    CommandSet::new(
        "GREE Thermostat",
        range,
        code(0xf0, 0),
        Some(code(0xfa, 0)),
        table(TableKind::Heat, range, 0x01),
        CoolTables::PerFan {
            silent: table(TableKind::CoolSilent, range, 0x02),
            auto: table(TableKind::CoolAuto, range, 0x03),
        },
        Some(table(TableKind::Dehumidification, range, 0x04)),
    ).unwrap()
}

fn thermostat(codes: CommandSet, session: StubSession) -> Thermostat<StubSession> {
    Thermostat::new("Bedroom", codes, Transmitter::new(session, RetryPolicy::default()), ())
}

fn last_sent(thermostat: &Thermostat<StubSession, impl irclimate2mqtt::climate::DefaultModeSource>) -> Option<&Waveform> {
    thermostat.transmitter().session().sent.last()
}


#[tokio::test]
async fn heat_at_22_sends_seventh_heat_code() {
    let codes = Model::GreeYb0fb2.load().unwrap();
    let expected = codes.heat().get(6).cloned();

    let mut thermostat = thermostat(codes, StubSession::default());

    assert_eq!(thermostat.set_temperature(22.0).await, Ok(true));
    assert_eq!(thermostat.set_mode(Mode::Heat).await, Ok(true));

    assert_eq!(last_sent(&thermostat), expected.as_ref());
    assert!(thermostat.state().confirmed);
}

#[tokio::test]
async fn silent_cool_at_minimum_sends_first_silent_code() {
    let mut thermostat = thermostat(revised(), StubSession::default());

    assert!(thermostat.set_fan_mode(FanMode::Silent).await);
    assert_eq!(thermostat.set_temperature(16.0).await, Ok(true));
    assert_eq!(thermostat.set_mode(Mode::Cool).await, Ok(true));

    assert_eq!(last_sent(&thermostat), Some(&code(0x02, 0)));
}

#[tokio::test]
async fn setpoint_while_off_switches_on() {
    let mut thermostat = thermostat(revised(), StubSession::default());

    thermostat.on_measurement(19.0);
    assert_eq!(thermostat.set_temperature(25.0).await, Ok(true));

    let state = thermostat.state();
    assert_eq!(state.mode, Mode::Auto);
    assert_eq!(state.target_temperature, 25.0);

    // colder than the setpoint, so auto heats
    assert_eq!(last_sent(&thermostat), Some(&code(0x01, 9)));
}

#[tokio::test]
async fn setpoint_while_off_uses_default_mode() {
    let transmitter = Transmitter::new(StubSession::default(), RetryPolicy::default());
    let mut thermostat = Thermostat::new("Living Room", revised(), transmitter, Mode::Dehumidification);

    thermostat.on_measurement(26.0);
    assert_eq!(thermostat.set_temperature(24.0).await, Ok(true));

    assert_eq!(thermostat.state().mode, Mode::Dehumidification);
    assert_eq!(last_sent(&thermostat), Some(&code(0x04, 8)));
}

#[tokio::test]
async fn setpoint_while_off_without_measurement_stays_off() {
    let mut thermostat = thermostat(revised(), StubSession::default());

    assert_eq!(thermostat.set_temperature(25.0).await, Ok(true));

    assert_eq!(thermostat.state().mode, Mode::Off);
    assert_eq!(last_sent(&thermostat), Some(&code(0xf0, 0)));
}

#[tokio::test]
async fn out_of_range_setpoints_switch_off() {
    let mut thermostat = thermostat(revised(), StubSession::default());
    assert_eq!(thermostat.set_mode(Mode::Heat).await, Ok(true));

    assert_eq!(thermostat.set_temperature(31.0).await, Ok(true));
    assert_eq!((thermostat.state().mode, thermostat.state().target_temperature), (Mode::Off, 30.0));
    assert_eq!(last_sent(&thermostat), Some(&code(0xf0, 0)));

    assert_eq!(thermostat.set_mode(Mode::Cool).await, Ok(true));
    assert_eq!(thermostat.set_temperature(15.0).await, Ok(true));
    assert_eq!((thermostat.state().mode, thermostat.state().target_temperature), (Mode::Off, 16.0));

    assert_eq!(thermostat.ui_range(), (15.0, 31.0));
}

#[tokio::test]
async fn auto_without_measurement_cools() {
    let mut thermostat = thermostat(revised(), StubSession::default()).with_target_temperature(20.0);

    assert_eq!(thermostat.set_mode(Mode::Auto).await, Ok(true));
    assert_eq!(last_sent(&thermostat), Some(&code(0x03, 4)));
}

#[tokio::test]
async fn sensor_updates_never_transmit() {
    let mut thermostat = thermostat(revised(), StubSession::default());

    assert!(thermostat.on_sensor_payload(b"21.5"));
    assert!(thermostat.on_sensor_payload(r#"{"state": "71.6", "attributes": {"unit_of_measurement": "°F"}}"#.as_bytes()));
    assert!(!thermostat.on_sensor_payload(b"unavailable"));

    let current = thermostat.state().current_temperature.unwrap();
    assert!((current - 22.0).abs() < 0.01);
    assert_eq!(thermostat.transmitter().session().attempts, 0);
}

#[tokio::test]
async fn two_timeouts_exhaust_the_default_budget() {
    let mut thermostat = thermostat(revised(), StubSession::failing(2, TransmitError::Timeout));

    assert_eq!(thermostat.set_mode(Mode::Heat).await, Ok(false));

    let session = thermostat.transmitter().session();
    assert_eq!(session.attempts, 2);
    assert_eq!(session.authentications, 1);
    assert!(session.sent.is_empty());

    // the requested state is kept, flagged as unconfirmed
    assert_eq!(thermostat.state().mode, Mode::Heat);
    assert!(!thermostat.state().confirmed);

    // the device recovers on the next command
    assert_eq!(thermostat.set_temperature(23.0).await, Ok(true));
    assert!(thermostat.state().confirmed);
}

#[tokio::test]
async fn larger_budget_rides_out_two_timeouts() {
    let transmitter = Transmitter::new(StubSession::failing(2, TransmitError::Timeout), RetryPolicy::new(3));
    let mut thermostat = Thermostat::new("Bedroom", revised(), transmitter, ());

    assert_eq!(thermostat.set_mode(Mode::Fan).await, Ok(true));
    assert_eq!(thermostat.transmitter().session().attempts, 3);
    assert_eq!(last_sent(&thermostat), Some(&code(0xfa, 0)));
}
