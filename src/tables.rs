//! The mnemonic key table.
//!
//! Maps patch mnemonics to handles into the engine's [`TextBank`]. The
//! table is declared once, in category order, and never mutated after
//! construction:
//!
//! ```text
//! mnemonics! rows ──> TablesBuilder::entry ──┬─ TextBank slot (the text)
//!                                            └─ MnemonicTable row (key -> id)
//! ```
//!
//! Lookups are exact and case-sensitive; a miss is not an error (patches
//! may name mnemonics unknown to this build). Duplicate keys are not
//! supposed to happen, but if one is ever declared the first row wins:
//! the hash index only accepts the first binding for a key.
//!
//! The gamma-calibration captions are engine text yet deliberately
//! unpatchable; they are filtered at build time and rejected again at
//! lookup time so no hand-built table can smuggle one in.

use crate::text::{StringId, TextBank, english, russian};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Key suffix under which the secondary locale's rows are declared.
pub const LOCALE_SUFFIX: &str = "_RUS";

/// Calibration caption keys that must never be matchable, in either
/// locale.
pub const CALIBRATION_CAPTIONS: [&str; 16] = [
    "GAMMALVL0",
    "GAMMALV02",
    "GAMMALV05",
    "GAMMALV07",
    "GAMMALVL1",
    "GAMMALV12",
    "GAMMALV15",
    "GAMMALVL2",
    "GAMMALV22",
    "GAMMALV25",
    "GAMMALV27",
    "GAMMALVL3",
    "GAMMALV32",
    "GAMMALV35",
    "GAMMALV37",
    "GAMMALVL4",
];

static EXCLUDED: Lazy<HashSet<&'static str>> = Lazy::new(|| CALIBRATION_CAPTIONS.into_iter().collect());

/// True when `key` names a calibration caption, with or without the
/// locale suffix.
pub(crate) fn is_excluded(key: &str) -> bool {
    let base = key.strip_suffix(LOCALE_SUFFIX).unwrap_or(key);
    EXCLUDED.contains(base)
}

/// One table row: a patch-facing key bound to a bank slot.
#[derive(Debug, Clone, Copy)]
pub struct MnemonicEntry {
    pub key: &'static str,
    pub id: StringId,
}

/// Immutable, ordered mapping from mnemonic keys to bank handles.
#[derive(Debug, Default)]
pub struct MnemonicTable {
    entries: Vec<MnemonicEntry>,
    index: HashMap<&'static str, StringId>,
}

impl MnemonicTable {
    /// Exact, case-sensitive lookup. `None` for unknown keys and for the
    /// excluded calibration captions.
    pub fn lookup(&self, key: &str) -> Option<StringId> {
        if is_excluded(key) {
            return None;
        }
        self.index.get(key).copied()
    }

    fn insert(&mut self, key: &'static str, id: StringId) {
        if is_excluded(key) {
            return;
        }
        self.entries.push(MnemonicEntry { key, id });
        // First-declared binding wins for duplicate keys.
        self.index.entry(key).or_insert(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &MnemonicEntry> {
        self.entries.iter()
    }
}

/// Accumulates bank slots and table rows during construction.
#[derive(Debug, Default)]
pub(crate) struct TablesBuilder {
    bank: TextBank,
    table: MnemonicTable,
}

impl TablesBuilder {
    pub(crate) fn entry(&mut self, key: &'static str, text: &'static str) {
        if is_excluded(key) {
            return;
        }
        let id = self.bank.add(text);
        self.table.insert(key, id);
    }

    fn finish(self) -> Tables {
        Tables { bank: self.bank, table: self.table }
    }
}

/// The text bank together with the mnemonic table built over it.
///
/// Constructed once at startup; the table side stays frozen, the bank
/// side accepts staged default overrides via
/// [`bank_mut`](Tables::bank_mut).
#[derive(Debug)]
pub struct Tables {
    bank: TextBank,
    table: MnemonicTable,
}

impl Tables {
    pub fn bank(&self) -> &TextBank {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut TextBank {
        &mut self.bank
    }

    pub fn mnemonics(&self) -> &MnemonicTable {
        &self.table
    }

    /// Build the stock table: the full English set followed by the
    /// secondary-locale rows under the `_RUS` suffix.
    pub fn doom() -> Self {
        let mut b = TablesBuilder::default();

        // part 1 - general initialization and prompts
        mnemonics!(b, english, "", [
            D_DEVSTR, D_CDROM, QUITMSG, LOADNET, QLOADNET, QSAVESPOT, SAVEDEAD, QSPROMPT,
            QLPROMPT, NEWGAME, NIGHTMARE, SWSTRING, MSGOFF, MSGON, NETEND, ENDGAME, DETAILHI,
            DETAILLO, EMPTYSTRING, GGSAVED, GGLOADED, SAVEGAMENAME,
        ]);
        // part 2 - messages when the player gets things
        mnemonics!(b, english, "", [
            GOTARMOR, GOTMEGA, GOTHTHBONUS, GOTARMBONUS, GOTSTIM, GOTMEDINEED, GOTMEDIKIT,
            GOTSUPER, GOTBLUECARD, GOTYELWCARD, GOTREDCARD, GOTBLUESKUL, GOTYELWSKUL,
            GOTREDSKULL, GOTINVUL, GOTBERSERK, GOTINVIS, GOTSUIT, GOTMAP, GOTVISOR, GOTMSPHERE,
            GOTCLIP, GOTCLIPBOX, GOTROCKET, GOTROCKET2, GOTROCKBOX, GOTCELL, GOTCELLBOX,
            GOTSHELLS, GOTSHELLS8, GOTSHELLBOX, GOTBACKPACK, GOTBFG9000, GOTCHAINGUN,
            GOTCHAINSAW, GOTLAUNCHER, GOTPLASMA, GOTSHOTGUN, GOTSHOTGUN2,
        ]);
        // part 3 - messages when keys are needed
        mnemonics!(b, english, "", [PD_BLUEO, PD_REDO, PD_YELLOWO, PD_BLUEK, PD_REDK, PD_YELLOWK]);
        // part 4 - multiplayer messaging
        mnemonics!(b, english, "", [
            HUSTR_MSGU, HUSTR_MESSAGESENT, HUSTR_CHATMACRO0, HUSTR_CHATMACRO1, HUSTR_CHATMACRO2,
            HUSTR_CHATMACRO3, HUSTR_CHATMACRO4, HUSTR_CHATMACRO5, HUSTR_CHATMACRO6,
            HUSTR_CHATMACRO7, HUSTR_CHATMACRO8, HUSTR_CHATMACRO9, HUSTR_TALKTOSELF1,
            HUSTR_TALKTOSELF2, HUSTR_TALKTOSELF3, HUSTR_TALKTOSELF4, HUSTR_TALKTOSELF5,
            HUSTR_PLRGREEN, HUSTR_PLRINDIGO, HUSTR_PLRBROWN, HUSTR_PLRRED,
        ]);
        // part 5 - level names in the automap
        mnemonics!(b, english, "", [
            HUSTR_E1M1, HUSTR_E1M2, HUSTR_E1M3, HUSTR_E1M4, HUSTR_E1M5, HUSTR_E1M6, HUSTR_E1M7,
            HUSTR_E1M8, HUSTR_E1M9, HUSTR_E2M1, HUSTR_E2M2, HUSTR_E2M3, HUSTR_E2M4, HUSTR_E2M5,
            HUSTR_E2M6, HUSTR_E2M7, HUSTR_E2M8, HUSTR_E2M9, HUSTR_E3M1, HUSTR_E3M2, HUSTR_E3M3,
            HUSTR_E3M4, HUSTR_E3M5, HUSTR_E3M6, HUSTR_E3M7, HUSTR_E3M8, HUSTR_E3M9, HUSTR_E4M1,
            HUSTR_E4M2, HUSTR_E4M3, HUSTR_E4M4, HUSTR_E4M5, HUSTR_E4M6, HUSTR_E4M7, HUSTR_E4M8,
            HUSTR_E4M9,
        ]);
        mnemonics!(b, english, "", [
            HUSTR_1, HUSTR_2, HUSTR_3, HUSTR_4, HUSTR_5, HUSTR_6, HUSTR_7, HUSTR_8, HUSTR_9,
            HUSTR_10, HUSTR_11, HUSTR_12, HUSTR_13, HUSTR_14, HUSTR_15, HUSTR_16, HUSTR_17,
            HUSTR_18, HUSTR_19, HUSTR_20, HUSTR_21, HUSTR_22, HUSTR_23, HUSTR_24, HUSTR_25,
            HUSTR_26, HUSTR_27, HUSTR_28, HUSTR_29, HUSTR_30, HUSTR_31, HUSTR_32,
        ]);
        mnemonics!(b, english, "", [
            PHUSTR_1, PHUSTR_2, PHUSTR_3, PHUSTR_4, PHUSTR_5, PHUSTR_6, PHUSTR_7, PHUSTR_8,
            PHUSTR_9, PHUSTR_10, PHUSTR_11, PHUSTR_12, PHUSTR_13, PHUSTR_14, PHUSTR_15,
            PHUSTR_16, PHUSTR_17, PHUSTR_18, PHUSTR_19, PHUSTR_20, PHUSTR_21, PHUSTR_22,
            PHUSTR_23, PHUSTR_24, PHUSTR_25, PHUSTR_26, PHUSTR_27, PHUSTR_28, PHUSTR_29,
            PHUSTR_30, PHUSTR_31, PHUSTR_32,
        ]);
        mnemonics!(b, english, "", [
            THUSTR_1, THUSTR_2, THUSTR_3, THUSTR_4, THUSTR_5, THUSTR_6, THUSTR_7, THUSTR_8,
            THUSTR_9, THUSTR_10, THUSTR_11, THUSTR_12, THUSTR_13, THUSTR_14, THUSTR_15,
            THUSTR_16, THUSTR_17, THUSTR_18, THUSTR_19, THUSTR_20, THUSTR_21, THUSTR_22,
            THUSTR_23, THUSTR_24, THUSTR_25, THUSTR_26, THUSTR_27, THUSTR_28, THUSTR_29,
            THUSTR_30, THUSTR_31, THUSTR_32,
        ]);
        // part 6 - messages as a result of toggling states
        mnemonics!(b, english, "", [
            AMSTR_FOLLOWON, AMSTR_FOLLOWOFF, AMSTR_GRIDON, AMSTR_GRIDOFF, AMSTR_MARKEDSPOT,
            AMSTR_MARKSCLEARED, STSTR_MUS, STSTR_NOMUS, STSTR_DQDON, STSTR_DQDOFF,
            STSTR_KFAADDED, STSTR_FAADDED, STSTR_KAADDED, STSTR_NCON, STSTR_NCOFF, STSTR_BEHOLD,
            STSTR_BEHOLDX, STSTR_CHOPPERS, STSTR_CLEV,
        ]);
        // part 7 - episode intermission texts
        mnemonics!(b, english, "", [
            E1TEXT, E2TEXT, E3TEXT, E4TEXT, C1TEXT, C2TEXT, C3TEXT, C4TEXT, C5TEXT, C6TEXT,
            P1TEXT, P2TEXT, P3TEXT, P4TEXT, P5TEXT, P6TEXT, T1TEXT, T2TEXT, T3TEXT, T4TEXT,
            T5TEXT, T6TEXT,
        ]);
        // part 8 - creature names for the finale
        mnemonics!(b, english, "", [
            CC_ZOMBIE, CC_SHOTGUN, CC_HEAVY, CC_IMP, CC_DEMON, CC_LOST, CC_CACO, CC_HELL,
            CC_BARON, CC_ARACH, CC_PAIN, CC_REVEN, CC_MANCU, CC_ARCH, CC_SPIDER, CC_CYBER,
            CC_HERO,
        ]);
        // part 9 - intermission tiled backgrounds; lump names, not
        // language text, so the values are inlined
        b.entry("BGFLATE1", "FLOOR4_8");
        b.entry("BGFLATE2", "SFLR6_1");
        b.entry("BGFLATE3", "MFLR8_4");
        b.entry("BGFLATE4", "MFLR8_3");
        b.entry("BGFLAT06", "SLIME16");
        b.entry("BGFLAT11", "RROCK14");
        b.entry("BGFLAT20", "RROCK07");
        b.entry("BGFLAT30", "RROCK17");
        b.entry("BGFLAT15", "RROCK13");
        b.entry("BGFLAT31", "RROCK19");
        b.entry("BGCASTCALL", "BOSSBACK");

        // secondary locale, same categories under the key suffix

        // part 1 - general initialization and prompts
        mnemonics!(b, russian, "_RUS", [
            D_DEVSTR, D_CDROM, QUITMSG, LOADNET, QLOADNET, QSAVESPOT, SAVEDEAD, QSPROMPT,
            QLPROMPT, NEWGAME, NIGHTMARE, SWSTRING, MSGOFF, MSGON, NETEND, ENDGAME, DETAILHI,
            DETAILLO, GGSAVED, GGLOADED,
        ]);
        // part 2 - messages when the player gets things
        mnemonics!(b, russian, "_RUS", [
            GOTARMOR, GOTMEGA, GOTHTHBONUS, GOTARMBONUS, GOTSTIM, GOTMEDINEED, GOTMEDIKIT,
            GOTSUPER, GOTBLUECARD, GOTYELWCARD, GOTREDCARD, GOTBLUESKUL, GOTYELWSKUL,
            GOTREDSKULL, GOTINVUL, GOTBERSERK, GOTINVIS, GOTSUIT, GOTMAP, GOTVISOR, GOTMSPHERE,
            GOTCLIP, GOTCLIPBOX, GOTROCKET, GOTROCKET2, GOTROCKBOX, GOTCELL, GOTCELLBOX,
            GOTSHELLS, GOTSHELLS8, GOTSHELLBOX, GOTBACKPACK, GOTBFG9000, GOTCHAINGUN,
            GOTCHAINSAW, GOTLAUNCHER, GOTPLASMA, GOTSHOTGUN, GOTSHOTGUN2,
        ]);
        // part 3 - messages when keys are needed
        mnemonics!(b, russian, "_RUS", [PD_BLUEO, PD_REDO, PD_YELLOWO, PD_BLUEK, PD_REDK, PD_YELLOWK]);
        // part 4 - multiplayer messaging
        mnemonics!(b, russian, "_RUS", [
            HUSTR_MSGU, HUSTR_MESSAGESENT, HUSTR_CHATMACRO0, HUSTR_CHATMACRO1, HUSTR_CHATMACRO2,
            HUSTR_CHATMACRO3, HUSTR_CHATMACRO4, HUSTR_CHATMACRO5, HUSTR_CHATMACRO6,
            HUSTR_CHATMACRO7, HUSTR_CHATMACRO8, HUSTR_CHATMACRO9, HUSTR_TALKTOSELF1,
            HUSTR_TALKTOSELF2, HUSTR_TALKTOSELF3, HUSTR_TALKTOSELF4, HUSTR_TALKTOSELF5,
            HUSTR_PLRGREEN, HUSTR_PLRINDIGO, HUSTR_PLRBROWN, HUSTR_PLRRED,
        ]);
        // part 5 - level names in the automap
        mnemonics!(b, russian, "_RUS", [
            HUSTR_E1M1, HUSTR_E1M2, HUSTR_E1M3, HUSTR_E1M4, HUSTR_E1M5, HUSTR_E1M6, HUSTR_E1M7,
            HUSTR_E1M8, HUSTR_E1M9, HUSTR_E2M1, HUSTR_E2M2, HUSTR_E2M3, HUSTR_E2M4, HUSTR_E2M5,
            HUSTR_E2M6, HUSTR_E2M7, HUSTR_E2M8, HUSTR_E2M9, HUSTR_E3M1, HUSTR_E3M2, HUSTR_E3M3,
            HUSTR_E3M4, HUSTR_E3M5, HUSTR_E3M6, HUSTR_E3M7, HUSTR_E3M8, HUSTR_E3M9, HUSTR_E4M1,
            HUSTR_E4M2, HUSTR_E4M3, HUSTR_E4M4, HUSTR_E4M5, HUSTR_E4M6, HUSTR_E4M7, HUSTR_E4M8,
            HUSTR_E4M9,
        ]);
        mnemonics!(b, russian, "_RUS", [
            HUSTR_1, HUSTR_2, HUSTR_3, HUSTR_4, HUSTR_5, HUSTR_6, HUSTR_7, HUSTR_8, HUSTR_9,
            HUSTR_10, HUSTR_11, HUSTR_12, HUSTR_13, HUSTR_14, HUSTR_15, HUSTR_16, HUSTR_17,
            HUSTR_18, HUSTR_19, HUSTR_20, HUSTR_21, HUSTR_22, HUSTR_23, HUSTR_24, HUSTR_25,
            HUSTR_26, HUSTR_27, HUSTR_28, HUSTR_29, HUSTR_30, HUSTR_31, HUSTR_32,
        ]);
        mnemonics!(b, russian, "_RUS", [
            PHUSTR_1, PHUSTR_2, PHUSTR_3, PHUSTR_4, PHUSTR_5, PHUSTR_6, PHUSTR_7, PHUSTR_8,
            PHUSTR_9, PHUSTR_10, PHUSTR_11, PHUSTR_12, PHUSTR_13, PHUSTR_14, PHUSTR_15,
            PHUSTR_16, PHUSTR_17, PHUSTR_18, PHUSTR_19, PHUSTR_20, PHUSTR_21, PHUSTR_22,
            PHUSTR_23, PHUSTR_24, PHUSTR_25, PHUSTR_26, PHUSTR_27, PHUSTR_28, PHUSTR_29,
            PHUSTR_30, PHUSTR_31, PHUSTR_32,
        ]);
        mnemonics!(b, russian, "_RUS", [
            THUSTR_1, THUSTR_2, THUSTR_3, THUSTR_4, THUSTR_5, THUSTR_6, THUSTR_7, THUSTR_8,
            THUSTR_9, THUSTR_10, THUSTR_11, THUSTR_12, THUSTR_13, THUSTR_14, THUSTR_15,
            THUSTR_16, THUSTR_17, THUSTR_18, THUSTR_19, THUSTR_20, THUSTR_21, THUSTR_22,
            THUSTR_23, THUSTR_24, THUSTR_25, THUSTR_26, THUSTR_27, THUSTR_28, THUSTR_29,
            THUSTR_30, THUSTR_31, THUSTR_32,
        ]);
        // part 6 - messages as a result of toggling states
        mnemonics!(b, russian, "_RUS", [
            AMSTR_FOLLOWON, AMSTR_FOLLOWOFF, AMSTR_GRIDON, AMSTR_GRIDOFF, AMSTR_MARKEDSPOT,
            AMSTR_MARKSCLEARED, STSTR_MUS, STSTR_NOMUS, STSTR_DQDON, STSTR_DQDOFF,
            STSTR_KFAADDED, STSTR_FAADDED, STSTR_KAADDED, STSTR_NCON, STSTR_NCOFF, STSTR_BEHOLD,
            STSTR_BEHOLDX, STSTR_CHOPPERS, STSTR_CLEV,
        ]);
        // part 7 - episode intermission texts
        mnemonics!(b, russian, "_RUS", [
            E1TEXT, E2TEXT, E3TEXT, E4TEXT, C1TEXT, C2TEXT, C3TEXT, C4TEXT, C5TEXT, C6TEXT,
            P1TEXT, P2TEXT, P3TEXT, P4TEXT, P5TEXT, P6TEXT, T1TEXT, T2TEXT, T3TEXT, T4TEXT,
            T5TEXT, T6TEXT,
        ]);
        // part 8 - creature names for the finale
        mnemonics!(b, russian, "_RUS", [
            CC_ZOMBIE, CC_SHOTGUN, CC_HEAVY, CC_IMP, CC_DEMON, CC_LOST, CC_CACO, CC_HELL,
            CC_BARON, CC_ARACH, CC_PAIN, CC_REVEN, CC_MANCU, CC_ARCH, CC_SPIDER, CC_CYBER,
            CC_HERO,
        ]);

        b.finish()
    }
}

impl Default for Tables {
    fn default() -> Self {
        Tables::doom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_table_covers_both_locales() {
        let tables = Tables::doom();
        let en = tables.mnemonics().lookup("GOTARMOR").unwrap();
        let ru = tables.mnemonics().lookup("GOTARMOR_RUS").unwrap();

        assert_eq!(tables.bank().resolve(en), english::GOTARMOR);
        assert_eq!(tables.bank().resolve(ru), russian::GOTARMOR);
        assert_ne!(en, ru);
    }

    #[test]
    fn stock_table_has_the_full_row_set() {
        let tables = Tables::doom();
        // Every row owns its own bank slot.
        assert_eq!(tables.mnemonics().len(), tables.bank().len());
        assert!(tables.mnemonics().len() > 550, "row count: {}", tables.mnemonics().len());
        // Declaration starts with the general prompts.
        assert_eq!(tables.mnemonics().iter().next().unwrap().key, "D_DEVSTR");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let tables = Tables::doom();
        assert!(tables.mnemonics().lookup("gotarmor").is_none());
        assert!(tables.mnemonics().lookup("GotArmor").is_none());
    }

    #[test]
    fn unknown_mnemonic_is_a_clean_miss() {
        let tables = Tables::doom();
        assert!(tables.mnemonics().lookup("FOOBAR").is_none());
    }

    #[test]
    fn calibration_captions_never_match() {
        let tables = Tables::doom();
        for key in CALIBRATION_CAPTIONS {
            assert!(tables.mnemonics().lookup(key).is_none(), "{key} must not match");
            let suffixed = format!("{key}{LOCALE_SUFFIX}");
            assert!(tables.mnemonics().lookup(&suffixed).is_none(), "{suffixed} must not match");
        }
    }

    #[test]
    fn calibration_captions_are_rejected_even_when_declared() {
        let mut b = TablesBuilder::default();
        b.entry("GAMMALVL0", english::GAMMALVL0);
        let tables = b.finish();
        assert!(tables.mnemonics().is_empty());
        assert!(tables.mnemonics().lookup("GAMMALVL0").is_none());
    }

    #[test]
    fn first_declared_duplicate_wins() {
        let mut b = TablesBuilder::default();
        b.entry("GOTARMOR", "first binding");
        b.entry("GOTARMOR", "second binding");
        let tables = b.finish();

        let id = tables.mnemonics().lookup("GOTARMOR").unwrap();
        assert_eq!(tables.bank().resolve(id), "first binding");
        // Both rows remain in declaration order; only the index collapses.
        assert_eq!(tables.mnemonics().len(), 2);
    }

    #[test]
    fn suffix_rows_skip_unlocalized_slots() {
        let tables = Tables::doom();
        assert!(tables.mnemonics().lookup("SAVEGAMENAME").is_some());
        assert!(tables.mnemonics().lookup("SAVEGAMENAME_RUS").is_none());
        assert!(tables.mnemonics().lookup("EMPTYSTRING_RUS").is_none());
        assert!(tables.mnemonics().lookup("BGFLATE1_RUS").is_none());
    }
}
