/*!
Identifier-keyed registries of live elements.

A registry is built fresh from one enumeration pass and never merged
incrementally. Key uniqueness is load-bearing: lookups address entries by
identifier alone, so insertion disambiguates duplicates with an integer
suffix instead of overwriting. Entries keep insertion order, which makes
"first match wins" deterministic.
*/

use indexmap::IndexMap;

use super::ident::{self, Derived};
use crate::platform::ElementHandle;
use crate::types::Identifier;

/// One registered element.
#[derive(Debug, Clone)]
pub struct RegistryEntry<H> {
  /// Live handle into the external tree.
  pub handle: H,
  /// Raw platform role; type filters compare against this.
  pub role: String,
  /// Normalized label the identifier was derived from.
  pub label: String,
}

/// Insertion-ordered mapping of identifier to entry.
#[derive(Debug, Clone)]
pub struct Registry<H> {
  entries: IndexMap<Identifier, RegistryEntry<H>>,
}

impl<H> Default for Registry<H> {
  fn default() -> Self {
    Self {
      entries: IndexMap::new(),
    }
  }
}

impl<H> Registry<H> {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Entry registered under `ident`, if any.
  pub fn get(&self, ident: &Identifier) -> Option<&RegistryEntry<H>> {
    self.entries.get(ident)
  }

  /// Entries in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &RegistryEntry<H>)> {
    self.entries.iter()
  }

  /// Identifiers in insertion order.
  pub fn idents(&self) -> impl Iterator<Item = &Identifier> {
    self.entries.keys()
  }

  /// Number of registered elements.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the registry holds no elements.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<H: ElementHandle> Registry<H> {
  /// Derive an identifier for `handle` and insert it, suffixing an index
  /// starting at 1 until the key is free. Never overwrites. Returns the key
  /// the element ended up under.
  pub(crate) fn insert(&mut self, handle: H) -> Identifier {
    let Derived {
      abbrev,
      raw_role,
      label,
    } = ident::derive(&handle);

    let mut key = Identifier::from(format!("{abbrev}{label}"));
    let mut index = 1u32;
    while self.entries.contains_key(&key) {
      key = Identifier::from(format!("{abbrev}{label}{index}"));
      index += 1;
    }

    self.entries.insert(
      key.clone(),
      RegistryEntry {
        handle,
        role: raw_role,
        label,
      },
    );
    key
  }
}
