use core::fmt;

/// Whether a member may be used from outside the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Private => "private",
        })
    }
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// A named property of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    name: &'static str,
    visibility: Visibility,
}

impl PropertyInfo {
    #[inline]
    pub const fn new(name: &'static str, visibility: Visibility) -> Self {
        Self { name, visibility }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        self.visibility.is_public()
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

/// A zero-argument method exposed by a class.
///
/// `fallible` methods return `Result<T, E>`; an `Err` surfaces as
/// [`AccessError::Failed`](crate::AccessError::Failed) when the method is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodInfo {
    name: &'static str,
    visibility: Visibility,
    fallible: bool,
}

impl MethodInfo {
    #[inline]
    pub const fn new(name: &'static str, visibility: Visibility) -> Self {
        Self {
            name,
            visibility,
            fallible: false,
        }
    }

    #[inline]
    pub const fn fallible(self) -> Self {
        Self {
            fallible: true,
            ..self
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    #[inline]
    pub const fn is_fallible(&self) -> bool {
        self.fallible
    }
}
