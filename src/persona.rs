use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key the active persona is persisted under.
pub const PERSONA_STORAGE_KEY: &str = "pk-portfolio-theme";

/// The two narrative framings every section is rendered in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Professional,
    Disruptor,
}

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::Professional, Persona::Disruptor];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Disruptor => "disruptor",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Professional => Self::Disruptor,
            Self::Disruptor => Self::Professional,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown persona: {0}")]
pub struct UnknownPersona(pub String);

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Self::Professional),
            "disruptor" => Ok(Self::Disruptor),
            other => Err(UnknownPersona(other.to_string())),
        }
    }
}

/// Where the persona preference survives a reload.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Option<Persona>;
    fn save(&self, persona: Persona);
}

/// Key/value store holding JSON-encoded values, the way the browser's local
/// storage does. Clones share the same backing map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    pub fn set_raw(&self, key: &str, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.into());
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Persona> {
        let raw = self.raw(PERSONA_STORAGE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, persona: Persona) {
        if let Ok(encoded) = serde_json::to_string(&persona) {
            self.set_raw(PERSONA_STORAGE_KEY, encoded);
        }
    }
}

type Subscriber = Box<dyn Fn(Persona) + Send + Sync>;

/// Single source of truth for the active persona.
///
/// Every change goes through [`PersonaContext::set_active`], which persists the
/// value and then notifies all subscribers in registration order.
pub struct PersonaContext {
    active: Persona,
    store: Box<dyn PreferenceStore>,
    subscribers: Vec<Subscriber>,
}

impl PersonaContext {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        let active = store.load().unwrap_or_default();
        Self {
            active,
            store: Box::new(store),
            subscribers: Vec::new(),
        }
    }

    pub fn active(&self) -> Persona {
        self.active
    }

    pub fn set_active(&mut self, persona: Persona) {
        self.active = persona;
        self.store.save(persona);
        self.notify();
    }

    pub fn toggle(&mut self) -> Persona {
        let next = self.active.toggled();
        self.set_active(next);
        next
    }

    /// Re-reads the store, e.g. once the browser storage is reachable after
    /// hydration. Subscribers only hear about actual changes.
    pub fn reload(&mut self) {
        let stored = self.store.load().unwrap_or_default();
        if stored != self.active {
            self.active = stored;
            self.notify();
        }
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(Persona) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(self.active);
        }
    }
}

impl fmt::Debug for PersonaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonaContext")
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_is_professional() {
        let ctx = PersonaContext::new(MemoryStore::new());
        assert_eq!(ctx.active(), Persona::Professional);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for persona in Persona::ALL {
            assert_eq!(persona.toggled().toggled(), persona);
            assert_ne!(persona.toggled(), persona);
        }

        let mut ctx = PersonaContext::new(MemoryStore::new());
        let start = ctx.active();
        ctx.toggle();
        assert_ne!(ctx.active(), start);
        ctx.toggle();
        assert_eq!(ctx.active(), start);
    }

    #[test]
    fn test_preference_survives_reload() {
        let store = MemoryStore::new();
        let mut ctx = PersonaContext::new(store.clone());
        ctx.set_active(Persona::Disruptor);
        assert_eq!(
            store.raw(PERSONA_STORAGE_KEY).as_deref(),
            Some("\"disruptor\"")
        );

        // simulates a page reload: fresh context over the same storage
        let reloaded = PersonaContext::new(store);
        assert_eq!(reloaded.active(), Persona::Disruptor);
    }

    #[test]
    fn test_garbage_preference_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set_raw(PERSONA_STORAGE_KEY, "\"visionary\"");
        let ctx = PersonaContext::new(store.clone());
        assert_eq!(ctx.active(), Persona::Professional);

        store.set_raw(PERSONA_STORAGE_KEY, "not json");
        let ctx = PersonaContext::new(store);
        assert_eq!(ctx.active(), Persona::Professional);
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut ctx = PersonaContext::new(MemoryStore::new());
        let first = Arc::clone(&seen);
        ctx.subscribe(move |p| first.lock().unwrap().push(("a", p)));
        let second = Arc::clone(&seen);
        ctx.subscribe(move |p| second.lock().unwrap().push(("b", p)));

        ctx.set_active(Persona::Disruptor);
        ctx.toggle();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("a", Persona::Disruptor),
                ("b", Persona::Disruptor),
                ("a", Persona::Professional),
                ("b", Persona::Professional),
            ]
        );
    }

    #[test]
    fn test_reload_notifies_only_on_change() {
        let store = MemoryStore::new();
        let mut ctx = PersonaContext::new(store.clone());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        ctx.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        ctx.reload();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // another tab wrote the preference
        store.save(Persona::Disruptor);
        ctx.reload();
        assert_eq!(ctx.active(), Persona::Disruptor);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        ctx.reload();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_persona_string_forms() {
        for persona in Persona::ALL {
            assert_eq!(persona.as_str().parse::<Persona>(), Ok(persona));
            assert_eq!(
                serde_json::to_string(&persona).unwrap(),
                format!("\"{persona}\"")
            );
        }
        assert!("Professional".parse::<Persona>().is_err());
    }
}
