//! Engine text storage.
//!
//! The engine's overridable strings live in a [`TextBank`]: one slot per
//! compiled-in constant, addressed by a stable copyable [`StringId`]. The
//! mnemonic table never stores string contents, only handles, so a
//! registration performed while parsing a patch always targets whatever
//! the bank *currently* holds for that slot:
//!
//! ```text
//! constants (english.rs / russian.rs)
//!        │ intern at table build
//!        ▼
//! TextBank slot ── set_default() may restage the text ──┐
//!        ▲                                              │
//!        └── resolve(id) at registration time ──────────┘
//! ```
//!
//! `resolve` is the only read path; an earlier override stage that calls
//! [`TextBank::set_default`] therefore changes what later patch lines
//! substitute against, without any aliasing of the stored text.

#[path = "text/english.rs"]
pub mod english;
#[path = "text/russian.rs"]
pub mod russian;

/// Stable handle to one slot in a [`TextBank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringId(u32);

#[derive(Debug, Clone)]
struct Slot {
    /// The compiled-in constant for this slot.
    compiled: &'static str,
    /// Staged override from an earlier, distinct patching stage, if any.
    current: Option<String>,
}

/// Storage for the engine's current default strings.
///
/// Built once alongside the mnemonic table; slots are only ever appended
/// during construction. After that the bank stays mutable in exactly one
/// way: [`set_default`](TextBank::set_default) restages a slot's text.
#[derive(Debug, Clone, Default)]
pub struct TextBank {
    slots: Vec<Slot>,
}

impl TextBank {
    pub fn new() -> Self {
        TextBank { slots: Vec::new() }
    }

    /// Append a slot holding `text` and return its handle.
    pub(crate) fn add(&mut self, text: &'static str) -> StringId {
        let id = StringId(self.slots.len() as u32);
        self.slots.push(Slot { compiled: text, current: None });
        id
    }

    /// The text a slot currently holds: the staged override when one was
    /// set, the compiled-in constant otherwise.
    pub fn resolve(&self, id: StringId) -> &str {
        let slot = &self.slots[id.0 as usize];
        slot.current.as_deref().unwrap_or(slot.compiled)
    }

    /// Restage a slot's default text. Replacements registered afterwards
    /// key on the new text.
    pub fn set_default(&mut self, id: StringId, text: impl Into<String>) {
        self.slots[id.0 as usize].current = Some(text.into());
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_compiled_text_by_default() {
        let mut bank = TextBank::new();
        let id = bank.add(english::GOTARMOR);
        assert_eq!(bank.resolve(id), "Picked up the armor.");
    }

    #[test]
    fn set_default_restages_the_slot() {
        let mut bank = TextBank::new();
        let id = bank.add(english::GOTARMOR);
        let other = bank.add(english::GOTMEGA);

        bank.set_default(id, "Armor acquired.");

        assert_eq!(bank.resolve(id), "Armor acquired.");
        // Neighboring slots are untouched.
        assert_eq!(bank.resolve(other), english::GOTMEGA);
    }

    #[test]
    fn handles_stay_valid_as_the_bank_grows() {
        let mut bank = TextBank::new();
        let first = bank.add(english::QUITMSG);
        for _ in 0..100 {
            bank.add(english::EMPTYSTRING);
        }
        assert_eq!(bank.resolve(first), english::QUITMSG);
        assert_eq!(bank.len(), 101);
    }
}
