//! In-memory Netonix switch.
//!
//! [`FakeSwitch`] holds the switch state behind a shared lock so a test can
//! keep a handle, drive the driver through a [`FakeConnector`], and then
//! inspect what the driver asked the switch to do.

use std::collections::VecDeque;
use std::sync::Arc;

use netonix_driver::{
    calls, ApiError, ApiResult, ConnectParams, Connector, MacEntry, NetonixApi, Status,
};
use parking_lot::Mutex;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::verification::VendorCall;

/// A candidate staged by `replaceConfig` or `mergeConfig`.
#[derive(Debug, Clone, PartialEq)]
pub enum StagedConfig {
    Replace(Value),
    Merge(Value),
}

/// Complete state of the fake switch.
#[derive(Debug, Clone)]
pub struct SwitchState {
    pub username: String,
    pub password: String,
    /// Identity returned by `getID`.
    pub id: Value,
    pub status: Status,
    /// Running configuration tree.
    pub config: Value,
    pub mac: Vec<MacEntry>,
    pub staged: Option<StagedConfig>,
    /// When false, connects and calls fail with a transport error.
    pub reachable: bool,
}

impl Default for SwitchState {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
            id: json!({"Model": "WS-12-250-AC", "Firmware": "1.5.14"}),
            status: Status::default(),
            config: json!({}),
            mac: Vec::new(),
            staged: None,
            reachable: true,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: SwitchState,
    /// Every call made by any session, in order.
    calls: Vec<VendorCall>,
    /// Injected failures, consumed by the next call with a matching name.
    failures: VecDeque<(&'static str, ApiError)>,
    sessions_opened: usize,
}

impl Inner {
    /// Records the call and returns the injected or transport failure, if any.
    fn enter(&mut self, call: VendorCall) -> ApiResult<()> {
        let name = call.name();
        self.calls.push(call);
        if !self.state.reachable {
            return Err(ApiError::transport("no route to host"));
        }
        let index = self.failures.iter().position(|(pending, _)| *pending == name);
        match index.and_then(|i| self.failures.remove(i)) {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }
}

/// Shared handle to a fake switch.
#[derive(Debug, Clone, Default)]
pub struct FakeSwitch {
    inner: Arc<Mutex<Inner>>,
}

impl FakeSwitch {
    pub fn new(state: SwitchState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state,
                ..Inner::default()
            })),
        }
    }

    /// Returns a connector that opens sessions against this switch.
    pub fn connector(&self) -> FakeConnector {
        FakeConnector {
            switch: self.clone(),
        }
    }

    pub fn credentials(&self) -> (String, String) {
        let inner = self.inner.lock();
        (inner.state.username.clone(), inner.state.password.clone())
    }

    /// Makes the next call named `call` fail with `err`.
    pub fn fail_next(&self, call: &'static str, err: ApiError) {
        self.inner.lock().failures.push_back((call, err));
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.inner.lock().state.reachable = reachable;
    }

    /// Runs `f` with mutable access to the state.
    pub fn update<R>(&self, f: impl FnOnce(&mut SwitchState) -> R) -> R {
        f(&mut self.inner.lock().state)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> SwitchState {
        self.inner.lock().state.clone()
    }

    pub fn calls(&self) -> Vec<VendorCall> {
        self.inner.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    pub fn sessions_opened(&self) -> usize {
        self.inner.lock().sessions_opened
    }

    pub fn running_config(&self) -> Value {
        self.inner.lock().state.config.clone()
    }

    pub fn staged(&self) -> Option<StagedConfig> {
        self.inner.lock().state.staged.clone()
    }
}

/// Opens [`FakeSession`]s after checking reachability and credentials.
#[derive(Debug, Clone)]
pub struct FakeConnector {
    switch: FakeSwitch,
}

impl Connector for FakeConnector {
    type Session = FakeSession;

    fn connect(&self, params: &ConnectParams<'_>) -> ApiResult<FakeSession> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::Open {
            username: params.username.to_string(),
        })?;

        if params.username != inner.state.username || params.password != inner.state.password {
            return Err(ApiError::authentication(params.username));
        }

        inner.sessions_opened += 1;
        debug!("Fake switch session {} opened", inner.sessions_opened);
        Ok(FakeSession {
            switch: self.switch.clone(),
            config_fetched: false,
        })
    }
}

/// One authenticated session against a [`FakeSwitch`].
#[derive(Debug)]
pub struct FakeSession {
    switch: FakeSwitch,
    /// Staging requires a prior `getConfig` in the same session, like the
    /// real firmware.
    config_fetched: bool,
}

impl FakeSession {
    fn require_fetched(&self, call: &'static str) -> ApiResult<()> {
        if self.config_fetched {
            Ok(())
        } else {
            Err(ApiError::protocol(call, "configuration not loaded in this session"))
        }
    }
}

impl NetonixApi for FakeSession {
    fn get_id(&mut self) -> ApiResult<Value> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::GetId)?;
        Ok(inner.state.id.clone())
    }

    fn get_status(&mut self) -> ApiResult<Status> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::GetStatus)?;
        Ok(inner.state.status.clone())
    }

    fn get_config(&mut self) -> ApiResult<Value> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::GetConfig)?;
        self.config_fetched = true;
        Ok(inner.state.config.clone())
    }

    fn get_mac(&mut self) -> ApiResult<Vec<MacEntry>> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::GetMac)?;
        Ok(inner.state.mac.clone())
    }

    fn get_diff(&mut self) -> ApiResult<Value> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::GetDiff)?;
        let state = &inner.state;
        match &state.staged {
            Some(staged) => {
                let candidate = apply_staged(&state.config, staged);
                Ok(diff_top_level(&state.config, &candidate))
            }
            None => Ok(json!([])),
        }
    }

    fn replace_config(&mut self, config: Value) -> ApiResult<()> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::ReplaceConfig(config.clone()))?;
        self.require_fetched(calls::REPLACE_CONFIG)?;
        inner.state.staged = Some(StagedConfig::Replace(config));
        Ok(())
    }

    fn merge_config(&mut self, config: Value) -> ApiResult<()> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::MergeConfig(config.clone()))?;
        self.require_fetched(calls::MERGE_CONFIG)?;
        inner.state.staged = Some(StagedConfig::Merge(config));
        Ok(())
    }

    fn put_config(&mut self) -> ApiResult<()> {
        let mut inner = self.switch.inner.lock();
        inner.enter(VendorCall::PutConfig)?;
        let Some(staged) = inner.state.staged.take() else {
            return Err(ApiError::rejected(calls::PUT_CONFIG, "no pending configuration"));
        };
        let committed = apply_staged(&inner.state.config, &staged);
        inner.state.config = committed;
        debug!("Fake switch committed staged configuration");
        Ok(())
    }
}

/// Returns the configuration `staged` would produce on top of `running`.
pub fn apply_staged(running: &Value, staged: &StagedConfig) -> Value {
    match staged {
        StagedConfig::Replace(candidate) => candidate.clone(),
        StagedConfig::Merge(patch) => {
            let mut merged = running.clone();
            merge_into(&mut merged, patch);
            merged
        }
    }
}

/// Objects merge key by key; anything else replaces.
fn merge_into(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

/// Lists top-level keys whose values differ, as the firmware's diff does.
fn diff_top_level(running: &Value, candidate: &Value) -> Value {
    let empty = Map::new();
    let old = running.as_object().unwrap_or(&empty);
    let new = candidate.as_object().unwrap_or(&empty);

    let mut changes = Vec::new();
    for (key, value) in new {
        if old.get(key) != Some(value) {
            changes.push(json!({"key": key, "old": old.get(key), "new": value}));
        }
    }
    for (key, value) in old {
        if !new.contains_key(key) {
            changes.push(json!({"key": key, "old": value, "new": null}));
        }
    }
    Value::Array(changes)
}
