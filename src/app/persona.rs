use leptos::prelude::*;

use crate::persona::{Persona, PersonaContext};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::persona::{PreferenceStore, PERSONA_STORAGE_KEY};

/// Browser local storage, through leptos-use's synced signal pair.
#[cfg(feature = "hydrate")]
struct LocalStorage {
    stored: Signal<Option<Persona>>,
    set_stored: WriteSignal<Option<Persona>>,
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<Persona> {
        self.stored.get_untracked()
    }

    fn save(&self, persona: Persona) {
        self.set_stored.set(Some(persona));
    }
}

/// The active persona as seen by components. Reads go through the signal;
/// every write goes through the context so it is persisted first.
#[derive(Clone, Copy)]
pub struct ActivePersona {
    persona: ReadSignal<Persona>,
    context: StoredValue<PersonaContext>,
}

impl ActivePersona {
    pub fn get(&self) -> Persona {
        self.persona.get()
    }

    pub fn update_context(&self, f: impl FnOnce(&mut PersonaContext)) {
        self.context.update_value(f);
    }
}

pub fn provide_persona() -> ActivePersona {
    #[cfg(feature = "hydrate")]
    let (store, stored) = {
        let (stored, set_stored, _) =
            use_local_storage::<Option<Persona>, JsonSerdeWasmCodec>(PERSONA_STORAGE_KEY);
        (LocalStorage { stored, set_stored }, stored)
    };
    // the server never sees the visitor's storage
    #[cfg(not(feature = "hydrate"))]
    let store = crate::persona::MemoryStore::new();

    let mut context = PersonaContext::new(store);
    let (persona, set_persona) = signal(context.active());
    context.subscribe(move |p| set_persona.set(p));
    context.subscribe(|p| log::debug!("persona set to {p}"));

    let active = ActivePersona {
        persona,
        context: StoredValue::new(context),
    };

    // picks up the stored preference after hydration and changes from other tabs
    #[cfg(feature = "hydrate")]
    Effect::watch(
        move || stored.get(),
        move |_, _, _| active.update_context(PersonaContext::reload),
        true,
    );

    provide_context(active);
    active
}

pub fn use_persona() -> ActivePersona {
    expect_context::<ActivePersona>()
}
