//! Items used by the code `#[derive(Object)]` generates.
//!
//! Not public API.

pub use crate::convert::object_from_dynamic;

/// Re-exports of `core`/`alloc` items, so generated code does not depend on
/// the caller's prelude.
pub mod macro_utils {
    pub use ::alloc::boxed::Box;
    pub use ::core::any::Any;
    pub use ::core::result::Result::{self, Err, Ok};
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::Class;
    use crate::registry::ClassRegistry;

    /// A registration function collected by [`inventory`].
    pub struct __AutoRegisterFunc(pub fn(&mut ClassRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Gives every class a registration function with a fixed signature.
    pub trait __RegisterType {
        fn __register(registry: &mut ClassRegistry);
    }

    impl<T: Class> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut ClassRegistry) {
            registry.register::<T>();
        }
    }

    // Runs only where `inventory` works, which is how availability is detected.
    fn mark_available(registry: &mut ClassRegistry) {
        registry.auto_registered = true;
    }

    inventory::submit! { __AutoRegisterFunc(mark_available) }

    pub fn __register_types(registry: &mut ClassRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
