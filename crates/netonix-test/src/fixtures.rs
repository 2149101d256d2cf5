//! Test fixtures for common switch layouts
//!
//! Provides reusable status, configuration and MAC table data. Config trees
//! are built with the vendor field names so they match what the firmware
//! serves.

use netonix_driver::{fields, MacEntry, PortStatus, Status, PORTS_KEY};
use netonix_types::PortId;
use serde_json::{json, Map, Value};

use crate::{FakeSwitch, SwitchState};

/// Hostname used by drivers built in tests.
pub const HOSTNAME: &str = "192.0.2.10";

/// Live status of one port with the given counters.
pub fn port_status(number: u32, link: &str, tx: (u64, u64), rx: (u64, u64)) -> PortStatus {
    PortStatus {
        number: PortId::new(number),
        link: link.to_string(),
        tx_octets: tx.0,
        tx_errors: tx.1,
        rx_octets: rx.0,
        rx_errors: rx.1,
    }
}

/// Status of an idle port: no traffic, no errors.
pub fn idle_port(number: u32, link: &str) -> PortStatus {
    port_status(number, link, (0, 0), (0, 0))
}

/// Config entry for one port, in vendor field names.
pub fn port_config(number: u32, name: &str, enable: bool, mtu: u32) -> Value {
    let mut port = Map::new();
    port.insert(fields::NUMBER.to_string(), json!(number));
    port.insert(fields::NAME.to_string(), json!(name));
    port.insert(fields::ENABLE.to_string(), json!(enable));
    port.insert(fields::MTU.to_string(), json!(mtu));
    Value::Object(port)
}

/// Full configuration tree holding `ports` plus a few unrelated sections.
pub fn config_tree(switch_name: &str, ports: Vec<Value>) -> Value {
    let mut tree = Map::new();
    tree.insert("Switch_Name".to_string(), json!(switch_name));
    tree.insert(PORTS_KEY.to_string(), Value::Array(ports));
    tree.insert(
        "Snmp".to_string(),
        json!({"Enable": false, "Community": "public"}),
    );
    Value::Object(tree)
}

/// MAC table entry as the switch reports it (hyphenated).
pub fn mac_entry(mac: &str, port: u32, vlan_id: u16) -> MacEntry {
    MacEntry {
        mac: mac.to_string(),
        port: PortId::new(port),
        vlan_id,
    }
}

/// A small tower switch used across the integration tests:
///
/// | Port | Link | Config |
/// |------|------|--------|
/// | 1 | 1G | "uplink", enabled, MTU 9000 |
/// | 2 | Down | "spare", disabled, MTU 1528 |
/// | 3 | 1M-F | none |
pub fn tower_switch() -> FakeSwitch {
    FakeSwitch::new(SwitchState {
        username: "admin".to_string(),
        password: "tower-secret".to_string(),
        status: Status {
            ports: vec![
                port_status(1, "1G", (884_120_331, 2), (1_204_993_112, 5)),
                idle_port(2, "Down"),
                port_status(3, "1M-F", (4_096, 0), (8_192, 1)),
            ],
        },
        config: config_tree(
            "tower-1",
            vec![
                port_config(1, "uplink", true, 9000),
                port_config(2, "spare", false, 1528),
            ],
        ),
        mac: vec![
            mac_entry("00-1C-58-29-4A-71", 1, 100),
            mac_entry("00-1C-58-29-4A-C1", 3, 200),
        ],
        ..SwitchState::default()
    })
}
