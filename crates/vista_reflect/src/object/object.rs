use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::AccessError;
use crate::info::ClassInfo;
use crate::object::{Dynamic, Exposed};

/// A value whose properties can be read and written by name.
///
/// This is the property accessor of the serializer: it lists the declared
/// properties (through [`ClassInfo`]), enforces their visibility and converts
/// between field types and the [`Exposed`] / [`Dynamic`] unions.
///
/// Implement it with [`#[derive(Object)]`](crate::derive::Object) rather than by hand.
///
/// # Examples
///
/// ```
/// use vista_reflect::{AccessError, Object, derive::Object};
/// use vista_reflect::object::Exposed;
/// use vista_reflect::value::Value;
///
/// #[derive(Object)]
/// #[object(method(label), method(secret, private))]
/// struct Tag {
///     id: u32,
///     #[object(private)]
///     owner: String,
/// }
///
/// impl Tag {
///     fn label(&self) -> String {
///         format!("#{}", self.id)
///     }
///
///     fn secret(&self) -> &'static str {
///         "hidden"
///     }
/// }
///
/// let tag = Tag { id: 7, owner: "root".into() };
/// let obj: &dyn Object = &tag;
///
/// assert!(matches!(obj.get("id"), Ok(Exposed::Data(Value::Int(7)))));
/// assert!(matches!(obj.get("owner"), Err(AccessError::PrivateProperty { .. })));
/// assert!(matches!(obj.get("nope"), Err(AccessError::MissingProperty { .. })));
///
/// assert!(matches!(obj.call("label"), Ok(Exposed::Data(Value::String(s))) if s == "#7"));
/// assert!(matches!(obj.call("secret"), Err(AccessError::PrivateMethod { .. })));
/// ```
pub trait Object: Any + Send + Sync {
    /// Returns the static information of the underlying class.
    fn class_info(&self) -> &'static ClassInfo;

    /// Reads a property.
    ///
    /// Fails with [`AccessError::PrivateProperty`] for a private property and
    /// [`AccessError::MissingProperty`] for an unknown name.
    fn get(&self, name: &str) -> Result<Exposed<'_>, AccessError>;

    /// Writes a property, converting `value` to the field type.
    fn set(&mut self, name: &str, value: Dynamic) -> Result<(), AccessError>;

    /// Calls a zero-argument method.
    ///
    /// The default implementation knows no callable method: it reports
    /// declared methods as private and everything else as missing.
    fn call(&self, name: &str) -> Result<Exposed<'static>, AccessError> {
        let info = self.class_info();
        if info.has_method(name) {
            Err(AccessError::private_method(info, name))
        } else {
            Err(AccessError::missing_method(info, name))
        }
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn Object {
    /// Returns `true` if the underlying value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().type_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Takes the underlying value out of the box.
    ///
    /// Returns the box unchanged if it does not hold a `T`.
    pub fn take<T: Any>(self: Box<Self>) -> Result<T, Box<dyn Object>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.into_any().downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => unreachable!("type checked above"),
        }
    }
}

impl fmt::Debug for dyn Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ .. }}", self.class_info().type_name())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::fmt;

    use crate::derive::Object;
    use crate::object::{Dynamic, Exposed};
    use crate::value::Value;
    use crate::{AccessError, Class, ConvertError, Object};

    #[derive(Debug)]
    struct Offline;

    impl fmt::Display for Offline {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("offline")
        }
    }

    impl core::error::Error for Offline {}

    #[derive(Object, Default)]
    #[object(name = "Account", default)]
    #[object(method(balance, fallible), method(tags))]
    struct Wallet {
        owner: String,
        cents: i64,
        online: bool,
        #[object(skip)]
        cache: Vec<u8>,
    }

    impl Wallet {
        fn balance(&self) -> Result<f64, Offline> {
            if self.online {
                Ok(self.cents as f64 / 100.0)
            } else {
                Err(Offline)
            }
        }

        fn tags(&self) -> Vec<String> {
            vec![self.owner.clone()]
        }
    }

    #[test]
    fn class_info() {
        let info = Wallet::info();
        assert_eq!(info.type_name(), "Account");
        assert!(info.type_path().ends_with("::Wallet"));
        assert_eq!(info.property_names().collect::<Vec<_>>(), ["owner", "cents", "online"]);
        assert!(info.method("balance").unwrap().is_fallible());
        assert!(Wallet::class_meta().is_instantiable());
    }

    #[test]
    fn skipped_fields_are_invisible() {
        let mut wallet = Wallet::default();
        assert!(matches!(wallet.get("cache"), Err(AccessError::MissingProperty { .. })));
        assert!(wallet.set("cache", Value::Null.into()).is_err());
        assert!(wallet.cache.is_empty());
    }

    #[test]
    fn set_converts() {
        let mut wallet = Wallet::default();
        wallet.set("cents", Value::Int(250).into()).unwrap();
        assert_eq!(wallet.cents, 250);

        let err = wallet.set("cents", Value::from("many").into()).unwrap_err();
        match err {
            AccessError::Convert {
                class,
                property,
                source: ConvertError::Mismatch { expected, .. },
            } => {
                assert_eq!(class, "Account");
                assert_eq!(property, "cents");
                assert_eq!(expected, "i64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fallible_method() {
        let mut wallet = Wallet {
            cents: 150,
            ..Default::default()
        };
        assert!(matches!(wallet.call("balance"), Err(AccessError::Failed { .. })));

        wallet.online = true;
        assert!(matches!(wallet.call("balance"), Ok(Exposed::Data(Value::Float(v))) if v == 1.5));
        assert!(matches!(wallet.call("tags"), Ok(Exposed::List(items)) if items.len() == 1));
        assert!(matches!(wallet.call("refund"), Err(AccessError::MissingMethod { .. })));
    }

    #[test]
    fn downcast_and_take() {
        let mut boxed: Box<dyn Object> = Box::new(Wallet::default());
        assert!(boxed.is::<Wallet>());
        boxed.downcast_mut::<Wallet>().unwrap().cents = 9;
        assert_eq!(boxed.downcast_ref::<Wallet>().unwrap().cents, 9);

        let boxed = boxed.take::<String>().unwrap_err();
        let wallet = boxed.take::<Wallet>().unwrap();
        assert_eq!(wallet.cents, 9);

        let dynamic = Dynamic::object(Wallet::default());
        assert_eq!(dynamic.kind(), crate::value::ValueKind::Object);
    }
}
