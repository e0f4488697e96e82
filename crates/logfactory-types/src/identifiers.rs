//! Type identifiers that scope loggers to the code that created them.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifies the Rust type a logger was requested for.
///
/// Built at compile time from a type parameter, so call sites never spell
/// the name by hand.
///
/// # Example
///
/// ```
/// use logfactory_types::SourceType;
///
/// struct Connection;
///
/// let source = SourceType::of::<Connection>();
/// assert!(source.full_name().ends_with("Connection"));
/// assert_eq!(source.short_name(), "Connection");
/// ```
#[derive(Clone, Copy)]
pub struct SourceType {
    full_name: &'static str,
    type_id: TypeId,
}

impl SourceType {
    /// Identifier for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            full_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Fully qualified path of the type, e.g. `my_crate::net::Connection`.
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Last path segment with generic arguments stripped.
    ///
    /// `alloc::vec::Vec<u8>` becomes `Vec`. Names that are not a plain path,
    /// such as tuples, references and trait objects, are returned whole.
    pub fn short_name(&self) -> &'static str {
        let full = self.full_name;
        let end = full
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
            .unwrap_or(full.len());
        if end == 0 || (end < full.len() && !full[end..].starts_with('<')) {
            return full;
        }

        let base = &full[..end];
        match base.rfind("::") {
            Some(pos) => &base[pos + 2..],
            None => base,
        }
    }

    /// The `TypeId` of the identified type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Whether this identifies `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl PartialEq for SourceType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for SourceType {}

impl Hash for SourceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SourceType").field(&self.full_name).finish()
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    mod nested {
        pub struct Gadget<T>(pub T);
    }

    #[test]
    fn test_full_name() {
        let source = SourceType::of::<Widget>();
        assert_eq!(source.full_name(), std::any::type_name::<Widget>());
        assert_eq!(source.to_string(), source.full_name());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(SourceType::of::<Widget>().short_name(), "Widget");
        assert_eq!(SourceType::of::<nested::Gadget<Vec<u8>>>().short_name(), "Gadget");
        assert_eq!(SourceType::of::<u32>().short_name(), "u32");
    }

    #[test]
    fn test_short_name_non_path_types() {
        let tuple = SourceType::of::<(Widget, nested::Gadget<u8>)>();
        assert_eq!(tuple.short_name(), tuple.full_name());

        let reference = SourceType::of::<&'static str>();
        assert_eq!(reference.short_name(), "&str");

        let object = SourceType::of::<dyn std::fmt::Debug>();
        assert_eq!(object.short_name(), object.full_name());

        let slice = SourceType::of::<[Widget]>();
        assert_eq!(slice.short_name(), slice.full_name());
    }

    #[test]
    fn test_equality_by_type() {
        assert_eq!(SourceType::of::<Widget>(), SourceType::of::<Widget>());
        assert_ne!(SourceType::of::<Widget>(), SourceType::of::<u32>());
        assert!(SourceType::of::<Widget>().is::<Widget>());
        assert!(!SourceType::of::<Widget>().is::<String>());
    }
}
