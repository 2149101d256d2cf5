//! NetonixDriver implementation - the Netonix side of the driver contract.

use std::path::Path;
use std::time::Duration;

use netdev_base::models::LAST_FLAPPED_UNKNOWN;
use netdev_base::{
    read_candidate, AliveRecord, ConfigRecord, ConfigRetrieve, DriverConfig, DriverError,
    DriverResult, InterfaceCounters, InterfaceRecord, Interfaces, InterfacesCounters,
    MacTableEntry, NetworkDriver,
};
use netonix_types::{normalize_mac, LinkState};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::api::{ConnectParams, Connector, NetonixApi};
use crate::records::PortConfig;
use crate::tables::{calls, defaults};

/// Session state. Every operation except open/close/is_alive requires
/// `Connected`.
enum Connection<S> {
    Disconnected,
    Connected(S),
}

/// How a loaded candidate is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadMode {
    Replace,
    Merge,
}

impl LoadMode {
    fn operation(self) -> &'static str {
        match self {
            LoadMode::Replace => "load_replace_candidate",
            LoadMode::Merge => "load_merge_candidate",
        }
    }

    fn vendor_call(self) -> &'static str {
        match self {
            LoadMode::Replace => calls::REPLACE_CONFIG,
            LoadMode::Merge => calls::MERGE_CONFIG,
        }
    }

    fn bad_candidate(self, reason: impl Into<String>) -> DriverError {
        let reason = reason.into();
        match self {
            LoadMode::Replace => DriverError::ReplaceConfig { reason },
            LoadMode::Merge => DriverError::MergeConfig { reason },
        }
    }
}

/// Driver for Netonix switches.
///
/// Holds the connection parameters and at most one session obtained from
/// the [`Connector`]. Every query fetches fresh data from the switch; nothing
/// is cached between calls.
pub struct NetonixDriver<C: Connector> {
    config: DriverConfig,
    connector: C,
    connection: Connection<C::Session>,
}

impl<C: Connector> NetonixDriver<C> {
    /// Creates a disconnected driver.
    pub fn new(config: DriverConfig, connector: C) -> Self {
        if !config.optional_args.is_empty() {
            debug!(
                "Ignoring optional arguments for {}: {:?}",
                config.hostname,
                config.optional_args.keys().collect::<Vec<_>>()
            );
        }

        Self {
            config,
            connector,
            connection: Connection::Disconnected,
        }
    }

    /// Returns the connection parameters.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Returns the connector sessions are opened with.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    fn session(&mut self, operation: &'static str) -> DriverResult<&mut C::Session> {
        match &mut self.connection {
            Connection::Connected(session) => Ok(session),
            Connection::Disconnected => Err(DriverError::NotConnected { operation }),
        }
    }

    fn load_candidate(
        &mut self,
        mode: LoadMode,
        filename: Option<&Path>,
        config: Option<&str>,
    ) -> DriverResult<()> {
        let session = self.session(mode.operation())?;

        let text = read_candidate(filename, config)?
            .ok_or_else(|| mode.bad_candidate("no candidate file or text supplied"))?;
        let candidate: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| mode.bad_candidate(e.to_string()))?;

        // The switch diffs and merges against the configuration it last served.
        session
            .get_config()
            .map_err(|e| DriverError::api(calls::GET_CONFIG, e))?;

        let staged = match mode {
            LoadMode::Replace => session.replace_config(candidate),
            LoadMode::Merge => session.merge_config(candidate),
        };
        staged.map_err(|e| DriverError::api(mode.vendor_call(), e))?;

        info!("Staged {:?} candidate", mode);
        Ok(())
    }
}

fn render(what: &'static str, value: &impl Serialize) -> DriverResult<String> {
    serde_json::to_string_pretty(value).map_err(|source| DriverError::Render { what, source })
}

impl<C: Connector> NetworkDriver for NetonixDriver<C> {
    #[instrument(skip_all, fields(host = %self.config.hostname))]
    fn open(&mut self) -> DriverResult<()> {
        self.config.validate()?;

        let params = ConnectParams {
            hostname: &self.config.hostname,
            username: &self.config.username,
            password: &self.config.password,
            timeout: self.config.timeout(),
        };
        let session = self
            .connector
            .connect(&params)
            .map_err(|e| DriverError::connection(self.config.hostname.clone(), e))?;

        if matches!(self.connection, Connection::Connected(_)) {
            debug!("Replacing existing session");
        }
        self.connection = Connection::Connected(session);
        info!("Connected to {}", self.config.hostname);
        Ok(())
    }

    #[instrument(skip_all, fields(host = %self.config.hostname))]
    fn close(&mut self) {
        if let Connection::Connected(_) =
            std::mem::replace(&mut self.connection, Connection::Disconnected)
        {
            info!("Closed session to {}", self.config.hostname);
        }
    }

    fn is_open(&self) -> bool {
        matches!(self.connection, Connection::Connected(_))
    }

    #[instrument(skip_all, fields(host = %self.config.hostname))]
    fn is_alive(&mut self) -> AliveRecord {
        let session = match &mut self.connection {
            Connection::Connected(session) => session,
            Connection::Disconnected => return AliveRecord::DEAD,
        };

        match session.get_id() {
            Ok(_) => AliveRecord::ALIVE,
            Err(e) => {
                debug!("Liveness probe failed: {}", e);
                AliveRecord::DEAD
            }
        }
    }

    #[instrument(skip_all, fields(host = %self.config.hostname))]
    fn get_interfaces(&mut self) -> DriverResult<Interfaces> {
        let session = self.session("get_interfaces")?;

        let status = session
            .get_status()
            .map_err(|e| DriverError::api(calls::GET_STATUS, e))?;

        let mut interfaces = Interfaces::new();
        for port in &status.ports {
            let link: LinkState = port.link.parse().map_err(|e| {
                DriverError::translation(format!("link state of {}", port.number), e)
            })?;

            interfaces.insert(
                port.number.interface_name(),
                InterfaceRecord {
                    is_up: link.is_up(),
                    is_enabled: defaults::DEFAULT_ENABLED,
                    description: defaults::DEFAULT_DESCRIPTION.to_string(),
                    last_flapped: LAST_FLAPPED_UNKNOWN,
                    speed: link.speed_mbps(),
                    mtu: defaults::DEFAULT_MTU,
                    mac_address: defaults::MAC_ADDRESS.to_string(),
                },
            );
        }

        let tree = session
            .get_config()
            .map_err(|e| DriverError::api(calls::GET_CONFIG, e))?;
        let port_configs = PortConfig::from_config_tree(&tree)
            .map_err(|e| DriverError::translation("port configuration", e))?;

        for port in port_configs {
            let Some(record) = interfaces.get_mut(&port.number.interface_name()) else {
                warn!("{} is configured but has no status, skipping", port.number);
                continue;
            };
            if let Some(name) = port.name {
                record.description = name;
            }
            if let Some(enable) = port.enable {
                record.is_enabled = enable;
            }
            if let Some(mtu) = port.mtu {
                record.mtu = mtu;
            }
        }

        debug!("Reporting {} interfaces", interfaces.len());
        Ok(interfaces)
    }

    #[instrument(skip_all, fields(host = %self.config.hostname))]
    fn get_interfaces_counters(&mut self) -> DriverResult<InterfacesCounters> {
        let session = self.session("get_interfaces_counters")?;

        let status = session
            .get_status()
            .map_err(|e| DriverError::api(calls::GET_STATUS, e))?;

        // The switch only reports aggregate octets and errors; packet
        // breakdowns and discards stay zero.
        let counters: InterfacesCounters = status
            .ports
            .iter()
            .map(|port| {
                (
                    port.number.interface_name(),
                    InterfaceCounters {
                        tx_octets: port.tx_octets,
                        tx_errors: port.tx_errors,
                        rx_octets: port.rx_octets,
                        rx_errors: port.rx_errors,
                        ..InterfaceCounters::default()
                    },
                )
            })
            .collect();

        debug!("Reporting counters for {} interfaces", counters.len());
        Ok(counters)
    }

    #[instrument(skip_all, fields(host = %self.config.hostname))]
    fn get_mac_address_table(&mut self) -> DriverResult<Vec<MacTableEntry>> {
        let session = self.session("get_mac_address_table")?;

        let table = session
            .get_mac()
            .map_err(|e| DriverError::api(calls::GET_MAC, e))?;

        let entries: Vec<MacTableEntry> = table
            .iter()
            .map(|entry| MacTableEntry {
                mac: normalize_mac(&entry.mac),
                interface: entry.port.interface_name(),
                vlan: entry.vlan_id,
                is_static: false,
                active: true,
                moves: None,
                last_move: None,
            })
            .collect();

        debug!("Reporting {} MAC table entries", entries.len());
        Ok(entries)
    }

    #[instrument(skip_all, fields(host = %self.config.hostname, retrieve = %retrieve))]
    fn get_config(&mut self, retrieve: ConfigRetrieve) -> DriverResult<ConfigRecord> {
        let session = self.session("get_config")?;

        // Netonix has a single configuration store; candidate and startup
        // are always empty.
        let running = if retrieve.wants_running() {
            let tree = session
                .get_config()
                .map_err(|e| DriverError::api(calls::GET_CONFIG, e))?;
            render("running configuration", &tree)?
        } else {
            String::new()
        };

        Ok(ConfigRecord {
            running,
            candidate: String::new(),
            startup: String::new(),
        })
    }

    #[instrument(skip_all, fields(host = %self.config.hostname, filename = ?filename))]
    fn load_replace_candidate(
        &mut self,
        filename: Option<&Path>,
        config: Option<&str>,
    ) -> DriverResult<()> {
        self.load_candidate(LoadMode::Replace, filename, config)
    }

    #[instrument(skip_all, fields(host = %self.config.hostname, filename = ?filename))]
    fn load_merge_candidate(
        &mut self,
        filename: Option<&Path>,
        config: Option<&str>,
    ) -> DriverResult<()> {
        self.load_candidate(LoadMode::Merge, filename, config)
    }

    #[instrument(skip_all, fields(host = %self.config.hostname))]
    fn compare_config(&mut self) -> DriverResult<String> {
        let session = self.session("compare_config")?;

        let diff = session
            .get_diff()
            .map_err(|e| DriverError::api(calls::GET_DIFF, e))?;
        render("configuration diff", &diff)
    }

    #[instrument(skip_all, fields(host = %self.config.hostname))]
    fn commit_config(&mut self, message: &str, revert_in: Option<Duration>) -> DriverResult<()> {
        let session = self.session("commit_config")?;

        if let Some(delay) = revert_in {
            warn!("Confirmed commit ({:?}) requested; not supported", delay);
            return Err(DriverError::Unsupported {
                feature: "commit confirm (revert_in)",
            });
        }
        if !message.is_empty() {
            debug!("Switch keeps no commit log, dropping message {:?}", message);
        }

        session
            .put_config()
            .map_err(|e| DriverError::api(calls::PUT_CONFIG, e))?;

        info!("Committed staged configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiResult, MockNetonixApi};
    use crate::records::{MacEntry, PortStatus, Status};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use netonix_types::{ParseError, PortId};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::RefCell;
    use std::io::Write;

    /// Hands out queued sessions, one per `connect`.
    struct MockConnector {
        sessions: RefCell<Vec<ApiResult<MockNetonixApi>>>,
        connects: RefCell<Vec<String>>,
    }

    impl MockConnector {
        fn with(session: ApiResult<MockNetonixApi>) -> Self {
            Self {
                sessions: RefCell::new(vec![session]),
                connects: RefCell::new(Vec::new()),
            }
        }
    }

    impl Connector for MockConnector {
        type Session = MockNetonixApi;

        fn connect(&self, params: &ConnectParams<'_>) -> ApiResult<MockNetonixApi> {
            self.connects.borrow_mut().push(format!(
                "{}@{}:{}",
                params.username, params.hostname, params.password
            ));
            self.sessions
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(ApiError::transport("no session queued")))
        }
    }

    fn test_config() -> DriverConfig {
        DriverConfig::new("192.0.2.10", "admin", "secret")
    }

    fn open_driver(mock: MockNetonixApi) -> NetonixDriver<MockConnector> {
        let mut driver = NetonixDriver::new(test_config(), MockConnector::with(Ok(mock)));
        driver.open().unwrap();
        driver
    }

    fn port_status(number: u32, link: &str) -> PortStatus {
        PortStatus {
            number: PortId::new(number),
            link: link.to_string(),
            tx_octets: 1000 * number as u64,
            tx_errors: number as u64,
            rx_octets: 2000 * number as u64,
            rx_errors: 2 * number as u64,
        }
    }

    fn status(ports: &[(u32, &str)]) -> Status {
        Status {
            ports: ports.iter().map(|(n, link)| port_status(*n, link)).collect(),
        }
    }

    #[test]
    fn test_open_passes_credentials() {
        let mut driver = NetonixDriver::new(
            test_config(),
            MockConnector::with(Ok(MockNetonixApi::new())),
        );
        assert!(!driver.is_open());

        driver.open().unwrap();

        assert!(driver.is_open());
        assert_eq!(
            driver.connector().connects.borrow().as_slice(),
            &["admin@192.0.2.10:secret".to_string()]
        );
    }

    #[test]
    fn test_open_failure_is_connection_error() {
        let mut driver = NetonixDriver::new(
            test_config(),
            MockConnector::with(Err(ApiError::authentication("admin"))),
        );

        let err = driver.open().unwrap_err();

        assert!(matches!(err, DriverError::Connection { ref host, .. } if host == "192.0.2.10"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(matches!(
            source.downcast_ref::<ApiError>(),
            Some(ApiError::Authentication { .. })
        ));
        assert!(!driver.is_open());
    }

    #[test]
    fn test_open_validates_config() {
        let mut driver = NetonixDriver::new(
            DriverConfig::new("", "admin", "secret"),
            MockConnector::with(Ok(MockNetonixApi::new())),
        );

        let err = driver.open().unwrap_err();

        assert!(matches!(err, DriverError::InvalidConfig { .. }));
        assert!(driver.connector().connects.borrow().is_empty());
    }

    #[test]
    fn test_operations_require_connection() {
        let mut driver = NetonixDriver::new(
            test_config(),
            MockConnector::with(Ok(MockNetonixApi::new())),
        );

        assert!(driver.get_interfaces().unwrap_err().is_precondition());
        assert!(driver.get_interfaces_counters().unwrap_err().is_precondition());
        assert!(driver.get_mac_address_table().unwrap_err().is_precondition());
        assert!(driver
            .get_config(ConfigRetrieve::All)
            .unwrap_err()
            .is_precondition());
        assert!(driver
            .load_replace_candidate(None, Some("{}"))
            .unwrap_err()
            .is_precondition());
        assert!(driver
            .load_merge_candidate(None, Some("{}"))
            .unwrap_err()
            .is_precondition());
        assert!(driver.compare_config().unwrap_err().is_precondition());
        assert!(driver.commit_config("", None).unwrap_err().is_precondition());
    }

    #[test]
    fn test_close_drops_session() {
        let mut driver = open_driver(MockNetonixApi::new());

        driver.close();

        assert!(!driver.is_open());
        let err = driver.get_interfaces().unwrap_err();
        assert!(matches!(
            err,
            DriverError::NotConnected {
                operation: "get_interfaces"
            }
        ));

        // closing twice is harmless
        driver.close();
    }

    #[test]
    fn test_is_alive() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_id()
            .times(1)
            .returning(|| Ok(json!({"Model": "WS-12-250-AC"})));
        let mut driver = open_driver(mock);

        assert_eq!(driver.is_alive(), AliveRecord::ALIVE);
    }

    #[test]
    fn test_is_alive_swallows_api_error() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_id()
            .times(1)
            .returning(|| Err(ApiError::transport("connection reset by peer")));
        let mut driver = open_driver(mock);

        assert_eq!(driver.is_alive(), AliveRecord::DEAD);
    }

    #[test]
    fn test_is_alive_when_disconnected() {
        let mut driver = NetonixDriver::new(
            test_config(),
            MockConnector::with(Ok(MockNetonixApi::new())),
        );

        assert!(!driver.is_alive().is_alive);
    }

    #[test]
    fn test_get_interfaces_merges_config() {
        let mut mock = MockNetonixApi::new();
        let mut seq = Sequence::new();
        let live = status(&[(1, "1G"), (2, "Down"), (3, "1M-H")]);
        mock.expect_get_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || Ok(live.clone()));
        mock.expect_get_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(json!({
                    "Ports": [
                        {"Number": 1, "Name": "uplink", "Enable": true, "MTU": 9000},
                        {"Number": 2, "Name": "spare", "Enable": false, "MTU": 1528}
                    ]
                }))
            });
        let mut driver = open_driver(mock);

        let interfaces = driver.get_interfaces().unwrap();

        assert_eq!(interfaces.len(), 3);
        assert_eq!(
            interfaces["Port 1"],
            InterfaceRecord {
                is_up: true,
                is_enabled: true,
                description: "uplink".to_string(),
                last_flapped: -1.0,
                speed: 1000.0,
                mtu: 9000,
                mac_address: String::new(),
            }
        );
        assert_eq!(
            interfaces["Port 2"],
            InterfaceRecord {
                is_up: false,
                is_enabled: false,
                description: "spare".to_string(),
                last_flapped: -1.0,
                speed: 0.0,
                mtu: 1528,
                mac_address: String::new(),
            }
        );
        // no config entry: defaults
        assert_eq!(interfaces["Port 3"].description, "");
        assert!(interfaces["Port 3"].is_enabled);
        assert_eq!(interfaces["Port 3"].mtu, 1500);
        assert_eq!(interfaces["Port 3"].speed, 1.0);
    }

    #[test]
    fn test_get_interfaces_partial_port_config() {
        let mut mock = MockNetonixApi::new();
        let live = status(&[(4, "1M-F")]);
        mock.expect_get_status()
            .returning(move || Ok(live.clone()));
        mock.expect_get_config()
            .returning(|| Ok(json!({"Ports": [{"Number": 4, "Enable": false}]})));
        let mut driver = open_driver(mock);

        let interfaces = driver.get_interfaces().unwrap();

        let port = &interfaces["Port 4"];
        assert!(!port.is_enabled);
        assert_eq!(port.description, "");
        assert_eq!(port.mtu, 1500);
    }

    #[test]
    fn test_get_interfaces_skips_config_without_status() {
        let mut mock = MockNetonixApi::new();
        let live = status(&[(1, "1G")]);
        mock.expect_get_status()
            .returning(move || Ok(live.clone()));
        mock.expect_get_config().returning(|| {
            Ok(json!({"Ports": [{"Number": 1, "Name": "a"}, {"Number": 26, "Name": "sfp"}]}))
        });
        let mut driver = open_driver(mock);

        let interfaces = driver.get_interfaces().unwrap();

        assert_eq!(interfaces.keys().collect::<Vec<_>>(), vec!["Port 1"]);
    }

    #[test]
    fn test_get_interfaces_unknown_link_state() {
        let mut mock = MockNetonixApi::new();
        let live = status(&[(1, "1G"), (2, "10G")]);
        mock.expect_get_status()
            .returning(move || Ok(live.clone()));
        mock.expect_get_config().never();
        let mut driver = open_driver(mock);

        let err = driver.get_interfaces().unwrap_err();

        assert!(matches!(err, DriverError::Translation { .. }));
        assert!(err.to_string().contains("Port 2"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.downcast_ref::<ParseError>(),
            Some(&ParseError::UnknownLinkState("10G".to_string()))
        );
    }

    #[test]
    fn test_get_interfaces_vendor_error_propagates() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_status()
            .returning(|| Err(ApiError::protocol("getStatus", "unexpected end of body")));
        let mut driver = open_driver(mock);

        let err = driver.get_interfaces().unwrap_err();

        assert!(matches!(
            err,
            DriverError::Api {
                operation: "getStatus",
                ..
            }
        ));
        let source = std::error::Error::source(&err).unwrap();
        assert!(matches!(
            source.downcast_ref::<ApiError>(),
            Some(ApiError::Protocol { .. })
        ));
    }

    #[test]
    fn test_get_interfaces_counters() {
        let mut mock = MockNetonixApi::new();
        let live = status(&[(1, "1G"), (2, "Down")]);
        mock.expect_get_status()
            .times(1)
            .returning(move || Ok(live.clone()));
        let mut driver = open_driver(mock);

        let counters = driver.get_interfaces_counters().unwrap();

        assert_eq!(
            counters["Port 2"],
            InterfaceCounters {
                tx_octets: 2000,
                tx_errors: 2,
                rx_octets: 4000,
                rx_errors: 4,
                ..InterfaceCounters::default()
            }
        );
        assert_eq!(counters["Port 1"].tx_unicast_packets, 0);
        assert_eq!(counters["Port 1"].rx_broadcast_packets, 0);
        assert_eq!(counters["Port 1"].tx_discards, 0);
    }

    #[test]
    fn test_get_mac_address_table() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_mac().times(1).returning(|| {
            Ok(vec![
                MacEntry {
                    mac: "00-1C-58-29-4A-71".to_string(),
                    port: PortId::new(7),
                    vlan_id: 100,
                },
                MacEntry {
                    mac: "ec-13-b2-0a-ff-01".to_string(),
                    port: PortId::new(1),
                    vlan_id: 1,
                },
            ])
        });
        let mut driver = open_driver(mock);

        let table = driver.get_mac_address_table().unwrap();

        assert_eq!(
            table[0],
            MacTableEntry {
                mac: "00:1C:58:29:4A:71".to_string(),
                interface: "Port 7".to_string(),
                vlan: 100,
                is_static: false,
                active: true,
                moves: None,
                last_move: None,
            }
        );
        assert_eq!(table[1].mac, "ec:13:b2:0a:ff:01");
        assert!(table.iter().all(|e| !e.is_static && e.active));
    }

    #[test]
    fn test_get_config_running() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_config()
            .times(1)
            .returning(|| Ok(json!({"Switch_Name": "tower-1", "Ports": []})));
        let mut driver = open_driver(mock);

        let config = driver.get_config(ConfigRetrieve::All).unwrap();

        assert_eq!(
            config.running,
            "{\n  \"Switch_Name\": \"tower-1\",\n  \"Ports\": []\n}"
        );
        assert_eq!(config.candidate, "");
        assert_eq!(config.startup, "");
    }

    #[test]
    fn test_get_config_candidate_only() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_config().never();
        let mut driver = open_driver(mock);

        let config = driver.get_config(ConfigRetrieve::Candidate).unwrap();

        assert_eq!(config, ConfigRecord::default());
    }

    #[test]
    fn test_load_replace_inline() {
        let mut mock = MockNetonixApi::new();
        let mut seq = Sequence::new();
        mock.expect_get_config()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(json!({})));
        mock.expect_replace_config()
            .with(eq(json!({"Switch_Name": "tower-2"})))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock.expect_merge_config().never();
        let mut driver = open_driver(mock);

        driver
            .load_replace_candidate(None, Some(r#"{"Switch_Name": "tower-2"}"#))
            .unwrap();
    }

    #[test]
    fn test_load_merge_file_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Ports": [{{"Number": 1, "MTU": 9000}}]}}"#).unwrap();

        let mut mock = MockNetonixApi::new();
        mock.expect_get_config().times(1).returning(|| Ok(json!({})));
        mock.expect_merge_config()
            .with(eq(json!({"Ports": [{"Number": 1, "MTU": 9000}]})))
            .times(1)
            .returning(|_| Ok(()));
        let mut driver = open_driver(mock);

        driver
            .load_merge_candidate(Some(file.path()), Some(r#"{"ignored": true}"#))
            .unwrap();
    }

    #[test]
    fn test_load_malformed_candidate() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_config().never();
        mock.expect_replace_config().never();
        mock.expect_merge_config().never();
        let mut driver = open_driver(mock);

        let err = driver
            .load_replace_candidate(None, Some("{\"Ports\": ["))
            .unwrap_err();
        assert!(matches!(err, DriverError::ReplaceConfig { .. }));
        assert!(err.is_bad_candidate());

        let err = driver.load_merge_candidate(None, Some("not json")).unwrap_err();
        assert!(matches!(err, DriverError::MergeConfig { .. }));
    }

    #[test]
    fn test_load_without_source() {
        let mut driver = open_driver(MockNetonixApi::new());

        let err = driver.load_merge_candidate(None, None).unwrap_err();

        assert!(err.is_bad_candidate());
    }

    #[test]
    fn test_load_rejected_by_switch() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_config().returning(|| Ok(json!({})));
        mock.expect_replace_config()
            .returning(|_| Err(ApiError::rejected("replaceConfig", "Ports must be a list")));
        let mut driver = open_driver(mock);

        let err = driver
            .load_replace_candidate(None, Some(r#"{"Ports": 5}"#))
            .unwrap_err();

        assert!(!err.is_bad_candidate());
        assert!(matches!(
            err,
            DriverError::Api {
                operation: "replaceConfig",
                ..
            }
        ));
    }

    #[test]
    fn test_compare_config() {
        let mut mock = MockNetonixApi::new();
        mock.expect_get_diff()
            .times(1)
            .returning(|| Ok(json!([{"path": "Switch_Name", "old": "a", "new": "b"}])));
        let mut driver = open_driver(mock);

        let diff = driver.compare_config().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&diff).unwrap();
        assert_eq!(parsed[0]["new"], "b");
        assert!(diff.contains("\n    \"path\""));
    }

    #[test]
    fn test_commit_config() {
        let mut mock = MockNetonixApi::new();
        mock.expect_put_config().times(1).returning(|| Ok(()));
        let mut driver = open_driver(mock);

        driver.commit_config("set uplink MTU", None).unwrap();
        assert!(!driver.has_pending_commit());
    }

    #[test]
    fn test_commit_confirm_unsupported() {
        let mut mock = MockNetonixApi::new();
        mock.expect_put_config().never();
        let mut driver = open_driver(mock);

        let err = driver
            .commit_config("", Some(Duration::from_secs(300)))
            .unwrap_err();

        assert!(matches!(err, DriverError::Unsupported { .. }));
    }

    #[test]
    fn test_discard_and_rollback_not_implemented() {
        let mut driver = open_driver(MockNetonixApi::new());

        assert!(matches!(
            driver.discard_config().unwrap_err(),
            DriverError::NotImplemented { .. }
        ));
        assert!(matches!(
            driver.rollback().unwrap_err(),
            DriverError::NotImplemented { .. }
        ));
    }
}
