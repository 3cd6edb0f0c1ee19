//! Classical mode flags.
//!
//! By default the crate produces modern plurals: "formulas", "people",
//! "elks". Each flag below opts in to an older or more formal inflexion for
//! one family of words. The flags are independent of each other. Setting
//! [all](ClassicalFlags::all) assigns every flag at once, after which any
//! single flag can be changed again without touching its siblings.

/// The individual flags, used to tag built-in data with the flag that
/// selects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Flag {
    Ancient,
    Persons,
    Names,
    Herd,
    Zero,
}

/// A snapshot of the six classical mode flags.
///
/// ```
/// use en_inflect::ClassicalFlags;
///
/// let mut flags = ClassicalFlags::default();
/// assert!(!flags.ancient);
///
/// flags.set_all(true);
/// flags.persons = false;
/// assert!(flags.all);
/// assert!(flags.ancient);
/// assert!(!flags.persons);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassicalFlags {
    /// Set by the most recent bulk assignment. This is tracked on its own
    /// and is not recomputed from the other flags.
    pub all: bool,
    /// Latin and Greek plurals: "formula" => "formulae", "index" =>
    /// "indices".
    pub ancient: bool,
    /// "person" => "persons" rather than "people".
    pub persons: bool,
    /// Capitalized names ending in "-s" are left alone when pluralizing:
    /// "Jones" => "Jones" rather than "Joneses". Words ending in "-ss", "-us"
    /// or "-is" are taken to be common nouns.
    pub names: bool,
    /// Game animals keep their singular form: "bison" => "bison" rather than
    /// "bisons".
    pub herd: bool,
    /// A count of zero takes the singular: "0 cat" rather than "0 cats".
    pub zero: bool,
}

impl ClassicalFlags {
    /// Returns a set of flags with every flag, including `all`, set to
    /// `on`.
    pub fn uniform(on: bool) -> Self {
        let mut flags = Self::default();
        flags.set_all(on);
        flags
    }

    /// Assigns `on` to all six flags.
    pub fn set_all(&mut self, on: bool) {
        self.all = on;
        self.ancient = on;
        self.persons = on;
        self.names = on;
        self.herd = on;
        self.zero = on;
    }

    pub(crate) fn is_set(&self, flag: Flag) -> bool {
        match flag {
            Flag::Ancient => self.ancient,
            Flag::Persons => self.persons,
            Flag::Names => self.names,
            Flag::Herd => self.herd,
            Flag::Zero => self.zero,
        }
    }

    pub(crate) fn set(&mut self, flag: Flag, on: bool) {
        match flag {
            Flag::Ancient => self.ancient = on,
            Flag::Persons => self.persons = on,
            Flag::Names => self.names = on,
            Flag::Herd => self.herd = on,
            Flag::Zero => self.zero = on,
        }
    }
}
