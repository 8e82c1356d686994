//! MQTT surface: one command topic per thermostat property, a retained state topic, and
//! Home Assistant discovery.
//!
//! Each thermostat runs in its own task and handles its messages one at a time, so a
//! command never observes another command's half-finished transmission.

use std::{collections::HashMap, str::FromStr, time::Duration};

use bytes::Bytes;
use rumqttc::{AsyncClient, Event, EventLoop, LastWill, MqttOptions, Packet, QoS};
use serde::Serialize;
use serde_json::{json, Value};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::climate::{DefaultModeSource, FanMode, Mode, Thermostat, ThermostatState};
use crate::config::Device;
use crate::hass::HaModeSource;
use crate::ir::CommandSet;
use crate::settings::MqttSettings;
use crate::transmit::DeviceSession;


/// A thermostat as the daemon builds it.
pub type Climate = Thermostat<Device, Option<HaModeSource>>;

const RECONNECT_DELAY: Duration = Duration::from_secs(5);
const QUEUE_DEPTH: usize = 16;


#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("invalid utf-8 payload")]
    Utf8,
    #[error("unknown mode {0:?}")]
    Mode(String),
    #[error("invalid temperature {0:?}")]
    Temperature(String),
    #[error("unknown fan mode {0:?}")]
    FanMode(String),
    #[error("invalid power state {0:?}, expected ON or OFF")]
    Power(String),
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CommandTopic {
    Mode,
    Temperature,
    FanMode,
    Power,
}

impl CommandTopic {
    pub fn parse(self, payload: &[u8]) -> Result<Message, CommandError> {
        let text = std::str::from_utf8(payload).map_err(|_| CommandError::Utf8)?.trim();

        match self {
            CommandTopic::Mode => Mode::from_str(text)
                .map(Message::Mode)
                .map_err(|_| CommandError::Mode(text.to_string())),
            CommandTopic::Temperature => text.parse::<f32>()
                .ok()
                .filter(|temperature| temperature.is_finite())
                .map(Message::Temperature)
                .ok_or_else(|| CommandError::Temperature(text.to_string())),
            CommandTopic::FanMode => FanMode::from_str(text)
                .map(Message::FanMode)
                .map_err(|_| CommandError::FanMode(text.to_string())),
            CommandTopic::Power => match text.to_ascii_uppercase().as_str() {
                "ON" => Ok(Message::Power(true)),
                "OFF" => Ok(Message::Power(false)),
                _ => Err(CommandError::Power(text.to_string()))
            },
        }
    }
}


#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Mode(Mode),
    Temperature(f32),
    FanMode(FanMode),
    Power(bool),
    Sensor(Bytes),
}


#[derive(Clone, Debug)]
pub struct Topics {
    base: String
}

impl Topics {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    pub fn availability(&self) -> String {
        format!("{}/status", self.base)
    }

    pub fn state(&self, id: &str) -> String {
        format!("{}/{}/state", self.base, id)
    }

    pub fn command(&self, id: &str, command: CommandTopic) -> String {
        format!("{}/{}/{}/set", self.base, id, command)
    }
}


/// Retained state document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatePayload {
    pub mode: &'static str,
    pub target_temperature: f32,
    pub current_temperature: Option<f32>,
    pub fan_mode: FanMode,
    pub confirmed: bool,
}

impl From<ThermostatState> for StatePayload {
    fn from(state: ThermostatState) -> Self {
        Self {
            mode: state.mode.hass_mode(),
            target_temperature: state.target_temperature,
            current_temperature: state.current_temperature,
            fan_mode: state.fan_mode,
            confirmed: state.confirmed,
        }
    }
}


/// Home Assistant MQTT `climate` discovery document.
pub fn discovery_config(topics: &Topics, id: &str, name: &str, codes: &CommandSet, ui_range: (f32, f32)) -> Value {
    let state_topic = topics.state(id);

    let modes: Vec<&str> = Mode::iter()
        .filter(|mode| *mode != Mode::Idle && codes.supports(*mode))
        .map(Mode::hass_mode)
        .collect();

    let mut config = json!({
        "name": name,
        "unique_id": format!("irclimate2mqtt_{id}"),
        "availability_topic": topics.availability(),
        "modes": modes,
        "mode_command_topic": topics.command(id, CommandTopic::Mode),
        "mode_state_topic": state_topic,
        "mode_state_template": "{{ value_json.mode }}",
        "temperature_command_topic": topics.command(id, CommandTopic::Temperature),
        "temperature_state_topic": state_topic,
        "temperature_state_template": "{{ value_json.target_temperature }}",
        "current_temperature_topic": state_topic,
        "current_temperature_template": "{{ value_json.current_temperature }}",
        "power_command_topic": topics.command(id, CommandTopic::Power),
        "min_temp": ui_range.0,
        "max_temp": ui_range.1,
        "temp_step": 1.0,
        "temperature_unit": "C",
        "device": {
            "identifiers": [format!("irclimate2mqtt_{id}")],
            "name": name,
            "model": codes.name(),
        }
    });

    if codes.has_fan_variants() {
        let fan_modes: Vec<String> = FanMode::iter().map(|fan_mode| fan_mode.to_string()).collect();

        config["fan_modes"] = json!(fan_modes);
        config["fan_mode_command_topic"] = json!(topics.command(id, CommandTopic::FanMode));
        config["fan_mode_state_topic"] = json!(state_topic);
        config["fan_mode_state_template"] = json!("{{ value_json.fan_mode }}");
    }

    config
}


/// Apply one message. Returns whether the published state needs refreshing.
pub async fn process<S: DeviceSession, D: DefaultModeSource>(thermostat: &mut Thermostat<S, D>, message: Message) -> bool {
    let result = match message {
        Message::Mode(mode) => thermostat.set_mode(mode).await.map(|_| ()),
        Message::Temperature(temperature) => thermostat.set_temperature(temperature).await.map(|_| ()),
        Message::FanMode(fan_mode) => {
            thermostat.set_fan_mode(fan_mode).await;
            Ok(())
        },
        Message::Power(true) => {
            thermostat.turn_on().await;
            Ok(())
        },
        Message::Power(false) => {
            thermostat.turn_off().await;
            Ok(())
        },
        Message::Sensor(payload) => return thermostat.on_sensor_payload(&payload),
    };

    match result {
        Ok(()) => true,
        Err(err) => {
            warn!(thermostat = thermostat.name(), %err, "command rejected");
            false
        }
    }
}


async fn publish_state(client: &AsyncClient, topic: &str, state: ThermostatState) {
    let payload = match serde_json::to_vec(&StatePayload::from(state)) {
        Ok(payload) => payload,
        Err(err) => {
            error!(%err, "failed to encode state");
            return;
        }
    };

    if let Err(err) = client.publish(topic, QoS::AtLeastOnce, true, payload).await {
        error!(topic, %err, "failed to publish state");
    }
}

async fn run_thermostat(mut thermostat: Climate, client: AsyncClient, state_topic: String, mut messages: mpsc::Receiver<Message>) {
    publish_state(&client, &state_topic, thermostat.state()).await;

    while let Some(message) = messages.recv().await {
        debug!(thermostat = thermostat.name(), ?message, "message");

        if process(&mut thermostat, message).await {
            publish_state(&client, &state_topic, thermostat.state()).await;
        }
    }
}


#[derive(Clone, Copy, Debug)]
enum Route {
    Command(CommandTopic),
    Sensor,
}

struct Subscriber {
    route: Route,
    id: String,
    sender: mpsc::Sender<Message>,
}


/// Incoming topics and the thermostat queues they feed. One topic may feed several
/// thermostats (a shared sensor).
#[derive(Default)]
struct Router {
    subscribers: HashMap<String, Vec<Subscriber>>,
}

impl Router {
    fn add(&mut self, topic: String, route: Route, id: &str, sender: mpsc::Sender<Message>) {
        self.subscribers.entry(topic).or_default().push(Subscriber { route, id: id.to_string(), sender });
    }

    fn topics(&self) -> Vec<String> {
        self.subscribers.keys().cloned().collect()
    }

    /// Queue `payload` for every subscriber of `topic`. Invalid commands and messages for
    /// full queues are dropped.
    fn dispatch(&self, topic: &str, payload: &Bytes) {
        let Some(subscribers) = self.subscribers.get(topic) else {
            debug!(topic, "no subscriber");
            return;
        };

        for subscriber in subscribers {
            let message = match subscriber.route {
                Route::Command(command) => match command.parse(payload) {
                    Ok(message) => message,
                    Err(err) => {
                        warn!(topic, %err, "invalid command");
                        continue;
                    }
                },
                Route::Sensor => Message::Sensor(payload.clone()),
            };

            // a busy thermostat must not stall the connection
            if let Err(err) = subscriber.sender.try_send(message) {
                warn!(id = %subscriber.id, %err, "dropping message");
            }
        }
    }
}


pub struct Bridge {
    client: AsyncClient,
    event_loop: EventLoop,
    topics: Topics,
    discovery_prefix: Option<String>,
    router: Router,
    discovery: Vec<(String, Vec<u8>)>,
}

impl Bridge {
    pub fn new(settings: &MqttSettings) -> Self {
        let topics = Topics::new(&settings.base_topic);

        let mut options = MqttOptions::new(&settings.client_id, &settings.host, settings.port);
        options.set_keep_alive(Duration::from_secs(30));
        options.set_last_will(LastWill::new(topics.availability(), "offline", QoS::AtLeastOnce, true));

        if let Some(username) = &settings.username {
            options.set_credentials(username, settings.password.as_deref().unwrap_or_default());
        }

        let (client, event_loop) = AsyncClient::new(options, 64);

        Self {
            client,
            event_loop,
            topics,
            discovery_prefix: settings.discovery_prefix().map(str::to_string),
            router: Router::default(),
            discovery: Vec::new(),
        }
    }

    pub fn topics(&self) -> &Topics {
        &self.topics
    }

    /// Start the task serving `thermostat` and route its topics to it.
    pub fn add(&mut self, id: &str, thermostat: Climate, sensor_topic: Option<&str>) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel(QUEUE_DEPTH);

        for command in CommandTopic::iter() {
            self.router.add(self.topics.command(id, command), Route::Command(command), id, sender.clone());
        }

        if let Some(topic) = sensor_topic {
            self.router.add(topic.to_string(), Route::Sensor, id, sender.clone());
        }

        if let Some(prefix) = &self.discovery_prefix {
            let config = discovery_config(&self.topics, id, thermostat.name(), thermostat.codes(), thermostat.ui_range());
            self.discovery.push((format!("{prefix}/climate/{id}/config"), serde_json::to_vec(&config)?));
        }

        info!(id, name = thermostat.name(), "serving thermostat");

        tokio::spawn(run_thermostat(thermostat, self.client.clone(), self.topics.state(id), receiver));

        Ok(())
    }

    /// Subscriptions and retained documents, reissued on every connection.
    fn on_connect(&self) {
        let client = self.client.clone();
        let topics = self.router.topics();
        let discovery = self.discovery.clone();
        let availability = self.topics.availability();

        tokio::spawn(async move {
            for topic in topics {
                if let Err(err) = client.subscribe(&topic, QoS::AtLeastOnce).await {
                    error!(%topic, %err, "failed to subscribe");
                }
            }

            for (topic, config) in discovery {
                if let Err(err) = client.publish(&topic, QoS::AtLeastOnce, true, config).await {
                    error!(%topic, %err, "failed to publish discovery");
                }
            }

            if let Err(err) = client.publish(&availability, QoS::AtLeastOnce, true, "online").await {
                error!(%err, "failed to publish availability");
            }
        });
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match self.event_loop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(_))) => {
                    info!("connected to broker");
                    self.on_connect();
                },
                Ok(Event::Incoming(Packet::Publish(publish))) => self.router.dispatch(&publish.topic, &publish.payload),
                Ok(_) => {},
                Err(err) => {
                    error!(%err, "MQTT connection error");
                    tokio::time::sleep(RECONNECT_DELAY).await;
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::ir::table::tests::{legacy_set, revised_set};
    use crate::transmit::{tests::ScriptedSession, RetryPolicy, Transmitter};

    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(CommandTopic::Mode.parse(b"cool"), Ok(Message::Mode(Mode::Cool)));
        assert_eq!(CommandTopic::Mode.parse(b"fan_only"), Ok(Message::Mode(Mode::Fan)));
        assert_eq!(CommandTopic::Mode.parse(b"dry"), Ok(Message::Mode(Mode::Dehumidification)));
        assert_eq!(CommandTopic::Mode.parse(b"warp"), Err(CommandError::Mode("warp".into())));

        assert_eq!(CommandTopic::Temperature.parse(b" 22.5\n"), Ok(Message::Temperature(22.5)));
        assert_eq!(CommandTopic::Temperature.parse(b"NaN"), Err(CommandError::Temperature("NaN".into())));

        assert_eq!(CommandTopic::FanMode.parse(b"silent"), Ok(Message::FanMode(FanMode::Silent)));
        assert_eq!(CommandTopic::FanMode.parse(b"turbo"), Err(CommandError::FanMode("turbo".into())));

        assert_eq!(CommandTopic::Power.parse(b"ON"), Ok(Message::Power(true)));
        assert_eq!(CommandTopic::Power.parse(b"off"), Ok(Message::Power(false)));
        assert_eq!(CommandTopic::Power.parse(&[0xff]), Err(CommandError::Utf8));
    }

    #[test]
    fn topic_layout() {
        let topics = Topics::new("irclimate/");

        assert_eq!(topics.state("bedroom"), "irclimate/bedroom/state");
        assert_eq!(topics.command("bedroom", CommandTopic::FanMode), "irclimate/bedroom/fan_mode/set");
        assert_eq!(topics.availability(), "irclimate/status");
    }

    #[test]
    fn state_document() {
        let state = ThermostatState {
            mode: Mode::Fan,
            target_temperature: 24.0,
            fan_mode: FanMode::Silent,
            current_temperature: None,
            confirmed: false
        };

        assert_eq!(
            serde_json::to_value(StatePayload::from(state)).unwrap(),
            json!({
                "mode": "fan_only",
                "target_temperature": 24.0,
                "current_temperature": null,
                "fan_mode": "silent",
                "confirmed": false
            })
        );
    }

    #[test]
    fn discovery_lists_supported_modes() {
        let topics = Topics::new("irclimate");

        let revised = discovery_config(&topics, "living_room", "Living Room", &revised_set(), (15.0, 31.0));
        assert_eq!(revised["modes"], json!(["off", "heat", "cool", "auto", "fan_only", "dry"]));
        assert_eq!(revised["fan_modes"], json!(["silent", "auto"]));
        assert_eq!(revised["min_temp"], json!(15.0));
        assert_eq!(revised["max_temp"], json!(31.0));
        assert_eq!(revised["mode_command_topic"], json!("irclimate/living_room/mode/set"));

        let legacy = discovery_config(&topics, "bedroom", "Bedroom", &legacy_set(), (15.0, 31.0));
        assert_eq!(legacy["modes"], json!(["off", "heat", "cool", "auto"]));
        assert!(legacy.get("fan_modes").is_none());
    }

    #[tokio::test]
    async fn processes_messages_in_order() {
        let transmitter = Transmitter::new(ScriptedSession::default(), RetryPolicy::default());
        let mut thermostat = Thermostat::new("Bedroom", revised_set(), transmitter, ());

        assert!(process(&mut thermostat, Message::Sensor(Bytes::from_static(b"19.5"))).await);
        assert!(!process(&mut thermostat, Message::Sensor(Bytes::from_static(b"unavailable"))).await);
        assert_eq!(thermostat.state().current_temperature, Some(19.5));

        assert!(process(&mut thermostat, Message::Temperature(22.0)).await);
        assert_eq!(thermostat.state().mode, Mode::Auto);

        assert!(process(&mut thermostat, Message::Power(false)).await);
        assert_eq!(thermostat.state().mode, Mode::Off);

        let mut legacy = Thermostat::new("Bedroom", legacy_set(), Transmitter::new(ScriptedSession::default(), RetryPolicy::default()), ());
        assert!(!process(&mut legacy, Message::Mode(Mode::Fan)).await);
        assert_eq!(legacy.transmitter().session().transmit_calls, 0);
    }

    #[test]
    fn routes_messages_to_thermostat_queues() {
        let topics = Topics::new("irclimate");
        let mut router = Router::default();

        let (bedroom, mut bedroom_rx) = mpsc::channel(2);
        let (study, mut study_rx) = mpsc::channel(1);

        let mode_topic = topics.command("bedroom", CommandTopic::Mode);
        router.add(mode_topic.clone(), Route::Command(CommandTopic::Mode), "bedroom", bedroom.clone());
        router.add("sensors/hall".to_string(), Route::Sensor, "bedroom", bedroom);
        router.add("sensors/hall".to_string(), Route::Sensor, "study", study);

        assert_eq!(router.topics().len(), 2);

        // a shared sensor feeds both thermostats
        let reading = Bytes::from_static(b"21.5");
        router.dispatch("sensors/hall", &reading);
        assert_eq!(bedroom_rx.try_recv().ok(), Some(Message::Sensor(reading.clone())));
        assert_eq!(study_rx.try_recv().ok(), Some(Message::Sensor(reading.clone())));

        router.dispatch(&mode_topic, &Bytes::from_static(b"warp"));
        router.dispatch("irclimate/study/mode/set", &Bytes::from_static(b"cool"));
        assert!(bedroom_rx.try_recv().is_err());
        assert!(study_rx.try_recv().is_err());

        router.dispatch(&mode_topic, &Bytes::from_static(b"heat"));
        assert_eq!(bedroom_rx.try_recv().ok(), Some(Message::Mode(Mode::Heat)));

        // the study queue holds one message, the second reading is dropped
        router.dispatch("sensors/hall", &reading);
        router.dispatch("sensors/hall", &Bytes::from_static(b"22.0"));
        assert_eq!(study_rx.try_recv().ok(), Some(Message::Sensor(reading.clone())));
        assert!(study_rx.try_recv().is_err());

        assert_eq!(bedroom_rx.try_recv().ok(), Some(Message::Sensor(reading)));
        assert_eq!(bedroom_rx.try_recv().ok(), Some(Message::Sensor(Bytes::from_static(b"22.0"))));
    }
}
