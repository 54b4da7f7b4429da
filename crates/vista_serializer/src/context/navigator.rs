use alloc::vec::Vec;
use core::fmt;

/// The path from the root object to the object being normalized.
///
/// Each level is a frame on the call stack that borrows its parent, so
/// descending never mutates shared state and an error raised deep inside a
/// nested call cannot leave a stale path behind.
///
/// # Examples
///
/// ```
/// use vista_serializer::Navigator;
///
/// let root = Navigator::root();
/// let customer = root.down("customer");
/// let address = customer.down("address");
///
/// assert_eq!(address.depth(), 2);
/// assert_eq!(address.path(), ["customer", "address"]);
/// assert_eq!(address.to_string(), "customer.address");
/// assert!(root.path().is_empty());
/// ```
#[derive(Clone, Copy)]
pub struct Navigator<'a> {
    parent: Option<&'a Navigator<'a>>,
    name: &'a str,
    depth: usize,
}

impl Default for Navigator<'_> {
    #[inline]
    fn default() -> Self {
        Self::root()
    }
}

impl<'a> Navigator<'a> {
    /// The empty path.
    #[inline]
    pub const fn root() -> Self {
        Self {
            parent: None,
            name: "",
            depth: 0,
        }
    }

    /// Returns the path extended by `name`.
    #[inline]
    pub fn down<'b>(&'b self, name: &'b str) -> Navigator<'b> {
        Navigator {
            parent: Some(self),
            name,
            depth: self.depth + 1,
        }
    }

    /// The number of property names in the path.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub const fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// The innermost property name, `None` at the root.
    #[inline]
    pub fn current(&self) -> Option<&'a str> {
        (!self.is_root()).then_some(self.name)
    }

    /// The property names from the root to the current object.
    pub fn path(&self) -> Vec<&'a str> {
        let mut path = Vec::with_capacity(self.depth);
        let mut frame = self;
        while let Some(parent) = frame.parent {
            path.push(frame.name);
            frame = parent;
        }
        path.reverse();
        path
    }
}

impl fmt::Display for Navigator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, name) in self.path().into_iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Navigator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Navigator({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Navigator;

    #[test]
    fn siblings_do_not_interfere() {
        let root = Navigator::root();
        let order = root.down("order");
        {
            let items = order.down("items");
            assert_eq!(items.path(), ["order", "items"]);
        }
        let customer = order.down("customer");
        assert_eq!(customer.path(), ["order", "customer"]);
        assert_eq!(customer.current(), Some("customer"));
        assert_eq!(root.current(), None);
    }
}
