use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Formatter};

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

// -----------------------------------------------------------------------------
// ViewEntry

/// A single entry of [`ViewData`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEntry {
    /// Includes the property; nested objects are not filtered.
    Field(String),
    /// Includes the property and filters the nested object with `view`.
    Nested { name: String, view: ViewData },
}

impl ViewEntry {
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(name) | Self::Nested { name, .. } => name,
        }
    }
}

// -----------------------------------------------------------------------------
// ViewData

/// A possibly nested list of visible property names.
///
/// The serde form mixes names and single-key maps, e.g.
/// `["id", "note", {"customer": ["name"]}]`.
///
/// # Examples
///
/// ```
/// use vista_serializer::ViewData;
///
/// let view = ViewData::new()
///     .field("id")
///     .nest("customer", ViewData::from_iter(["name"]));
///
/// assert!(view.includes("id"));
/// assert!(view.includes("customer"));
/// assert!(!view.includes("note"));
///
/// // Filters for `order.customer`:
/// let nested = view.descend(["customer"]).unwrap();
/// assert!(nested.includes("name"));
///
/// // `id` has no nested filter, so nothing is filtered below it.
/// assert!(view.descend(["id"]).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewData {
    entries: Vec<ViewEntry>,
}

impl ViewData {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a plain property name.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.push(ViewEntry::Field(name.into()));
        self
    }

    /// Adds a property with a filter for its nested object.
    pub fn nest(mut self, name: impl Into<String>, view: ViewData) -> Self {
        self.push(ViewEntry::Nested {
            name: name.into(),
            view,
        });
        self
    }

    #[inline]
    pub fn push(&mut self, entry: ViewEntry) {
        self.entries.push(entry);
    }

    #[inline]
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `name` is listed, as a plain name or as a nested key.
    pub fn includes(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name() == name)
    }

    /// Returns the nested filter of `name`, if it has one.
    pub fn nested(&self, name: &str) -> Option<&ViewData> {
        self.entries.iter().find_map(|entry| match entry {
            ViewEntry::Nested { name: key, view } if key == name => Some(view),
            _ => None,
        })
    }

    /// Follows `path` through nested filters.
    ///
    /// `None` means some segment has no nested filter: nothing is filtered at
    /// that depth.
    pub fn descend<'p>(&self, path: impl IntoIterator<Item = &'p str>) -> Option<&ViewData> {
        path.into_iter()
            .try_fold(self, |view, segment| view.nested(segment))
    }
}

impl<S: Into<String>> FromIterator<S> for ViewData {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|name| ViewEntry::Field(name.into()))
                .collect(),
        }
    }
}

// -----------------------------------------------------------------------------
// View

/// Selects the properties visible during a normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// A view defined in the class metadata.
    Named(String),
    /// A literal filter.
    Inline(ViewData),
}

impl From<&str> for View {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Named(name.into())
    }
}

impl From<String> for View {
    #[inline]
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<ViewData> for View {
    #[inline]
    fn from(data: ViewData) -> Self {
        Self::Inline(data)
    }
}

// -----------------------------------------------------------------------------
// Serde

struct NestedEntries<'a>(&'a str, &'a ViewData);

impl Serialize for NestedEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(1))?;
        state.serialize_entry(self.0, self.1)?;
        state.end()
    }
}

impl Serialize for ViewData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            match entry {
                ViewEntry::Field(name) => state.serialize_element(name)?,
                ViewEntry::Nested { name, view } => {
                    state.serialize_element(&NestedEntries(name, view))?;
                }
            }
        }
        state.end()
    }
}

impl Serialize for View {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Named(name) => serializer.serialize_str(name),
            Self::Inline(data) => data.serialize(serializer),
        }
    }
}

/// One element of a serialized view list: a name, or a map of nested filters.
struct EntryVisitor<'a>(&'a mut ViewData);

impl<'de> Visitor<'de> for EntryVisitor<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a property name or a map of nested views")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<(), E> {
        self.0.push(ViewEntry::Field(v.into()));
        Ok(())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        while let Some((name, view)) = map.next_entry::<String, ViewData>()? {
            self.0.push(ViewEntry::Nested { name, view });
        }
        Ok(())
    }
}

struct EntrySeed<'a>(&'a mut ViewData);

impl<'de> serde::de::DeserializeSeed<'de> for EntrySeed<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(EntryVisitor(self.0))
    }
}

struct ViewDataVisitor;

impl<'de> Visitor<'de> for ViewDataVisitor {
    type Value = ViewData;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a list of property names and nested views")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ViewData, A::Error> {
        let mut data = ViewData::new();
        while seq.next_element_seed(EntrySeed(&mut data))?.is_some() {}
        Ok(data)
    }

    /// A bare map is a list made only of nested views.
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<ViewData, A::Error> {
        let mut data = ViewData::new();
        EntryVisitor(&mut data).visit_map(map)?;
        Ok(data)
    }
}

impl<'de> Deserialize<'de> for ViewData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ViewDataVisitor)
    }
}

struct ViewVisitor;

impl<'de> Visitor<'de> for ViewVisitor {
    type Value = View;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a view name or a list of property names")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<View, E> {
        Ok(View::Named(v.into()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<View, A::Error> {
        ViewDataVisitor.visit_seq(seq).map(View::Inline)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<View, A::Error> {
        ViewDataVisitor.visit_map(map).map(View::Inline)
    }
}

impl<'de> Deserialize<'de> for View {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ViewVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{View, ViewData, ViewEntry};

    #[test]
    fn json_shape() {
        let view: ViewData =
            serde_json::from_str(r#"["id", {"customer": ["name", {"address": ["city"]}]}]"#)
                .unwrap();

        assert_eq!(view.len(), 2);
        assert!(matches!(&view.entries()[0], ViewEntry::Field(name) if name == "id"));

        let address = view.descend(["customer", "address"]).unwrap();
        assert!(address.includes("city"));
        assert!(view.descend(["customer", "name"]).is_none());

        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(json, r#"["id",{"customer":["name",{"address":["city"]}]}]"#);
    }

    #[test]
    fn empty_path_is_self() {
        let view = ViewData::from_iter(["a"]);
        assert_eq!(view.descend(Vec::new()), Some(&view));
    }

    #[test]
    fn view_selector() {
        let named: View = serde_json::from_str(r#""public""#).unwrap();
        assert_eq!(named, View::from("public"));

        let inline: View = serde_json::from_str(r#"["id"]"#).unwrap();
        assert_eq!(inline, View::Inline(ViewData::new().field("id")));
    }

    #[test]
    fn ron_shape() {
        let view: ViewData = ron::from_str(r#"["id", {"customer": ["name"]}]"#).unwrap();
        let expected = ViewData::new()
            .field("id")
            .nest("customer", ViewData::from_iter(["name"]));
        assert_eq!(view, expected);
    }
}
