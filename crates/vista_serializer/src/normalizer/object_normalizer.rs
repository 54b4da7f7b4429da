use alloc::vec::Vec;

use vista_reflect::object::{Dynamic, Exposed};
use vista_reflect::value::{Record, Value};
use vista_reflect::{AccessError, Object};

use crate::context::{Navigator, View, ViewData};
use crate::metadata::{ClassMetadata, PropertyConfiguration};
use crate::{Context, Error, MethodFault, Scope, Serializer};

// -----------------------------------------------------------------------------
// ObjectNormalizer

/// Converts objects to [`Record`]s and back, property by property.
///
/// Normalizing walks the declared properties in order. For each one it
/// applies the view of the current path, reads the value through the
/// configured getter or the property itself, and hands nested objects to
/// [`Serializer::normalize_value`] so that registered normalizers take
/// priority. Private properties are left out.
///
/// Denormalizing writes every property present in the record. With class
/// metadata, a raw value is rebuilt by the first rule that applies: nested
/// `class` instantiation, then the denormalizer function (both for maps and
/// lists only), then the coercion.
///
/// # Examples
///
/// ```
/// use vista_reflect::derive::Object;
/// use vista_serializer::{Context, ObjectNormalizer, Serializer, ViewData};
///
/// #[derive(Object, Default)]
/// #[object(default)]
/// struct User {
///     id: u64,
///     name: String,
///     #[object(private)]
///     password: String,
/// }
///
/// let serializer = Serializer::new();
/// let normalizer = ObjectNormalizer::new(&serializer);
///
/// let user = User { id: 1, name: "Ann".into(), password: "hunter2".into() };
/// let record = normalizer.normalize(&user, None).unwrap();
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["id", "name"]);
///
/// let context = Context::new().with_view(ViewData::from_iter(["name"]));
/// let record = normalizer.normalize(&user, Some(&context)).unwrap();
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["name"]);
///
/// let mut copy = User::default();
/// normalizer.denormalize(&record, &mut copy, None).unwrap();
/// assert_eq!(copy.name, "Ann");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectNormalizer<'s> {
    serializer: &'s Serializer,
}

impl<'s> ObjectNormalizer<'s> {
    #[inline]
    pub const fn new(serializer: &'s Serializer) -> Self {
        Self { serializer }
    }

    /// Normalizes a root object.
    pub fn normalize(&self, value: &dyn Object, context: Option<&Context>) -> Result<Record, Error> {
        self.normalize_scoped(value, Scope::new(self.serializer, context))
    }

    /// Normalizes an object found at the position of `scope`.
    pub fn normalize_scoped(&self, value: &dyn Object, scope: Scope<'_>) -> Result<Record, Error> {
        let info = value.class_info();
        let context = scope.context();
        let metadata = context
            .and_then(Context::metadata)
            .and_then(|collection| collection.for_class(info));
        let filter = context.and_then(|ctx| resolve_filter(ctx, metadata, scope.navigator()));

        let mut record = Record::with_capacity(info.properties().len());

        for property in info.properties() {
            let name = property.name();

            if let Some(filter) = filter
                && !filter.includes(name)
            {
                log::trace!("`{}::{name}` is not in the view", info.type_name());
                continue;
            }

            let getter = metadata
                .and_then(|metadata| metadata.attribute(name))
                .and_then(PropertyConfiguration::getter);

            let exposed = match getter {
                Some(getter) => call_getter(value, getter, name)?,
                None => match value.get(name) {
                    Ok(exposed) => exposed,
                    Err(err) if err.is_private_property() => {
                        log::trace!("`{}::{name}` is private", info.type_name());
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                },
            };

            let normalized = self.normalize_exposed(exposed, scope.down(name))?;
            record.insert(name, normalized);
        }

        Ok(record)
    }

    fn normalize_exposed(&self, exposed: Exposed<'_>, scope: Scope<'_>) -> Result<Value, Error> {
        match exposed {
            Exposed::Data(value) => Ok(value),
            Exposed::Object(obj) => self.serializer.normalize_value(&*obj, scope),
            // Items share the path of the list property.
            Exposed::List(items) => items
                .into_iter()
                .map(|item| self.normalize_exposed(item, scope))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
        }
    }

    /// Populates `target` from `record`.
    ///
    /// Properties missing from the record keep their value. On error, the
    /// properties written so far stay written.
    pub fn denormalize(
        &self,
        record: &Record,
        target: &mut dyn Object,
        context: Option<&Context>,
    ) -> Result<(), Error> {
        let info = target.class_info();
        let metadata = context
            .and_then(Context::metadata)
            .and_then(|collection| collection.for_class(info));

        for property in info.properties() {
            let name = property.name();
            let Some(raw) = record.get(name) else {
                continue;
            };

            let value = match metadata.and_then(|metadata| metadata.attribute(name)) {
                Some(config) => self.reconstruct(raw, config, &*target, name, context)?,
                None => Dynamic::Data(raw.clone()),
            };

            target.set(name, value)?;
        }

        Ok(())
    }

    fn reconstruct(
        &self,
        raw: &Value,
        config: &PropertyConfiguration,
        target: &dyn Object,
        property: &str,
        context: Option<&Context>,
    ) -> Result<Dynamic, Error> {
        if let Some(class) = config.class()
            && raw.is_record_shaped()
        {
            return self.instantiate_nested(class, raw, property, context);
        }

        if let Some(denormalizer) = config.denormalizer()
            && raw.is_record_shaped()
        {
            return denormalizer
                .call(raw, target, context)
                .map_err(Error::User);
        }

        let Some(coercion) = config.coercion() else {
            return Ok(Dynamic::Data(raw.clone()));
        };

        coercion
            .apply(raw.clone())
            .map(Dynamic::Data)
            .map_err(|found| Error::Coercion {
                class: target.class_info().type_name(),
                property: property.into(),
                coercion: coercion.clone(),
                found,
            })
    }

    fn instantiate_nested(
        &self,
        class: &str,
        raw: &Value,
        property: &str,
        context: Option<&Context>,
    ) -> Result<Dynamic, Error> {
        match raw {
            Value::Map(record) => {
                let mut nested =
                    self.serializer
                        .instantiate(class)
                        .map_err(|source| Error::Instantiate {
                            class: class.into(),
                            property: property.into(),
                            source,
                        })?;
                log::debug!("instantiated `{class}` for property `{property}`");
                self.denormalize(record, &mut *nested, context)?;
                Ok(Dynamic::Object(nested))
            }
            Value::List(items) => items
                .iter()
                .map(|item| self.instantiate_nested(class, item, property, context))
                .collect::<Result<Vec<_>, _>>()
                .map(Dynamic::List),
            other => Ok(Dynamic::Data(other.clone())),
        }
    }
}

// -----------------------------------------------------------------------------
// Helpers

/// Returns the filter for the object at `navigator`, `None` to include everything.
fn resolve_filter<'c>(
    context: &'c Context,
    metadata: Option<&'c ClassMetadata>,
    navigator: &Navigator<'_>,
) -> Option<&'c ViewData> {
    let data = match context.view()? {
        View::Inline(data) => data,
        View::Named(name) => {
            let metadata = metadata?;
            let Some(data) = metadata.view(name) else {
                // Views are usually declared on the root class only.
                if navigator.is_root() {
                    log::warn!(
                        "view `{name}` is not defined for `{}`, nothing is filtered",
                        metadata.class_name()
                    );
                } else {
                    log::debug!(
                        "view `{name}` is not defined for `{}` at `{navigator}`",
                        metadata.class_name()
                    );
                }
                return None;
            };
            data
        }
    };

    data.descend(navigator.path())
        .filter(|data| !data.is_empty())
}

fn call_getter(value: &dyn Object, getter: &str, property: &str) -> Result<Exposed<'static>, Error> {
    let info = value.class_info();

    let fault = match info.method(getter) {
        None => Some(MethodFault::Missing),
        Some(method) if !method.is_public() => Some(MethodFault::NotPublic),
        Some(_) => None,
    };

    if let Some(fault) = fault {
        return Err(Error::Method {
            getter: getter.into(),
            class: info.type_name(),
            property: property.into(),
            fault,
        });
    }

    value.call(getter).map_err(|err| match err {
        AccessError::Failed { source, .. } => Error::User(source),
        err => Error::Access(err),
    })
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use vista_reflect::derive::Object;
    use vista_reflect::value::{Record, Value};
    use vista_reflect::{AccessError, ConvertError, Object as _};

    use crate::metadata::{ClassMetadata, Coercion, MetadataCollection, PropertyConfiguration};
    use crate::{Context, Error, MethodFault, Serializer, View, ViewData};

    #[derive(Object, Default, Debug, Clone, PartialEq)]
    #[object(default, method(display, fallible))]
    struct User {
        id: u64,
        name: String,
        ssn: String,
    }

    impl User {
        fn display(&self) -> Result<String, &'static str> {
            if self.id == 0 {
                return Err("anonymous user");
            }
            Ok(format!("{} (#{})", self.name, self.id))
        }
    }

    #[derive(Object, Default, Debug)]
    #[object(
        default,
        method(compute_total),
        method(discount),
        method(audit_total, private),
        method(checked_total, fallible)
    )]
    struct Order {
        id: u64,
        note: String,
        total: i64,
        customer: User,
        #[object(private)]
        secret: String,
    }

    impl Order {
        fn compute_total(&self) -> i64 {
            self.total * 2
        }

        fn discount(&self) -> Option<i64> {
            None
        }

        fn audit_total(&self) -> i64 {
            self.total
        }

        fn checked_total(&self) -> Result<i64, &'static str> {
            Err("ledger offline")
        }
    }

    #[derive(Object, Default, Debug)]
    #[object(default)]
    struct Cart {
        items: Vec<User>,
        labels: Vec<String>,
    }

    #[derive(Object, Debug)]
    struct Timestamp {
        secs: i64,
    }

    #[derive(Object, Debug)]
    struct Event {
        name: String,
        at: Timestamp,
    }

    #[derive(Object, Default, Debug)]
    #[object(default)]
    struct Reading {
        count: i64,
        ratio: f64,
        maybe: Option<i64>,
        raw: Value,
    }

    #[derive(Object, Default, Debug)]
    #[object(default)]
    struct Flags {
        label: Value,
        enabled: Value,
    }

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    fn keys(record: &Record) -> Vec<&str> {
        record.keys().collect()
    }

    fn context(metadata: MetadataCollection) -> Context {
        Context::new().with_metadata(Arc::new(metadata))
    }

    fn ann() -> User {
        User {
            id: 7,
            name: "Ann".into(),
            ssn: "123-45".into(),
        }
    }

    fn order() -> Order {
        Order {
            id: 1,
            note: "fragile".into(),
            total: 21,
            customer: ann(),
            secret: "s3cr3t".into(),
        }
    }

    fn serializer() -> Serializer {
        Serializer::builder()
            .with_class::<User>()
            .with_class::<Order>()
            .build()
    }

    // -------------------------------------------------------------------------
    // Normalize

    #[test]
    fn round_trip_without_metadata() {
        let serializer = serializer();
        let user = ann();

        let record = serializer.normalize(&user, None).unwrap();
        assert_eq!(keys(&record), ["id", "name", "ssn"]);

        let copy: User = serializer.denormalize_into(&record, None).unwrap();
        assert_eq!(copy, user);
    }

    #[test]
    fn named_view() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("User").with_view("public", ViewData::from_iter(["id", "name"])),
        );
        let context = context(metadata).with_view("public");

        let record = serializer().normalize(&ann(), Some(&context)).unwrap();
        assert_eq!(keys(&record), ["id", "name"]);
    }

    #[test]
    fn view_from_property_membership() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("User")
                .with_property("ssn", PropertyConfiguration::new().in_view("internal")),
        );
        let context = context(metadata).with_view("internal");

        let record = serializer().normalize(&ann(), Some(&context)).unwrap();
        assert_eq!(keys(&record), ["ssn"]);
    }

    #[test]
    fn undefined_or_empty_view_filters_nothing() {
        let serializer = serializer();

        let metadata = MetadataCollection::new().with(ClassMetadata::new("User"));
        let undefined = context(metadata).with_view("admin");
        let record = serializer.normalize(&ann(), Some(&undefined)).unwrap();
        assert_eq!(keys(&record), ["id", "name", "ssn"]);

        // A named view without metadata.
        let bare = Context::new().with_view("public");
        let record = serializer.normalize(&ann(), Some(&bare)).unwrap();
        assert_eq!(record.len(), 3);

        let empty = Context::new().with_view(ViewData::new());
        let record = serializer.normalize(&ann(), Some(&empty)).unwrap();
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn inline_nested_view() {
        let view: View = serde_json::from_str(r#"["id", {"customer": ["name"]}]"#).unwrap();
        let context = Context::new().with_view(view);

        let record = serializer().normalize(&order(), Some(&context)).unwrap();
        assert_eq!(keys(&record), ["id", "customer"]);

        let customer = record.get("customer").unwrap().as_map().unwrap();
        assert_eq!(keys(customer), ["name"]);
        assert_eq!(customer.get("name"), Some(&Value::from("Ann")));
    }

    #[test]
    fn named_view_follows_the_path_of_nested_objects() {
        let public = || {
            ViewData::new()
                .field("id")
                .nest("customer", ViewData::from_iter(["name"]))
        };
        let metadata = MetadataCollection::new()
            .with(ClassMetadata::new("Order").with_view("public", public()))
            .with(ClassMetadata::new("User").with_view("public", public()));
        let context = context(metadata).with_view("public");

        let record = serializer().normalize(&order(), Some(&context)).unwrap();
        assert_eq!(keys(&record), ["id", "customer"]);

        let customer = record.get("customer").unwrap().as_map().unwrap();
        assert_eq!(keys(customer), ["name"]);
    }

    #[test]
    fn named_view_skips_nested_classes_without_metadata() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("Order").with_view(
                "public",
                ViewData::new()
                    .field("id")
                    .nest("customer", ViewData::from_iter(["name"])),
            ),
        );
        let context = context(metadata).with_view("public");

        let record = serializer().normalize(&order(), Some(&context)).unwrap();
        assert_eq!(keys(&record), ["id", "customer"]);

        let customer = record.get("customer").unwrap().as_map().unwrap();
        assert_eq!(keys(customer), ["id", "name", "ssn"]);
    }

    #[test]
    fn plain_view_entry_does_not_filter_nested_object() {
        let context = Context::new().with_view(ViewData::from_iter(["customer"]));

        let record = serializer().normalize(&order(), Some(&context)).unwrap();
        assert_eq!(keys(&record), ["customer"]);

        let customer = record.get("customer").unwrap().as_map().unwrap();
        assert_eq!(keys(customer), ["id", "name", "ssn"]);
    }

    #[test]
    fn getter_overrides_field() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("Order")
                .with_property("total", PropertyConfiguration::new().with_getter("compute_total"))
                .with_property("note", PropertyConfiguration::new().with_getter("discount")),
        );
        let context = context(metadata);

        let record = serializer().normalize(&order(), Some(&context)).unwrap();
        assert_eq!(record.get("total"), Some(&Value::Int(42)));
        // A getter returning nothing is final.
        assert_eq!(record.get("note"), Some(&Value::Null));
    }

    #[test]
    fn misconfigured_getters() {
        let serializer = serializer();

        for (getter, fault) in [
            ("audit_total", MethodFault::NotPublic),
            ("nope", MethodFault::Missing),
        ] {
            let metadata = MetadataCollection::new().with(
                ClassMetadata::new("Order")
                    .with_property("total", PropertyConfiguration::new().with_getter(getter)),
            );
            let context = context(metadata);

            let err = serializer.normalize(&order(), Some(&context)).unwrap_err();
            match err {
                Error::Method {
                    getter: name,
                    class,
                    property,
                    fault: found,
                } => {
                    assert_eq!(name, getter);
                    assert_eq!(class, "Order");
                    assert_eq!(property, "total");
                    assert_eq!(found, fault);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn failing_getter_is_a_user_error() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("Order")
                .with_property("total", PropertyConfiguration::new().with_getter("checked_total")),
        );
        let context = context(metadata);

        let err = serializer().normalize(&order(), Some(&context)).unwrap_err();
        assert!(matches!(&err, Error::User(source) if source.to_string() == "ledger offline"));
    }

    #[test]
    fn private_property_is_skipped() {
        let record = serializer().normalize(&order(), None).unwrap();
        assert_eq!(keys(&record), ["id", "note", "total", "customer"]);
        assert!(!record.contains_key("secret"));
    }

    #[test]
    fn nested_object_becomes_record() {
        let record = serializer().normalize(&order(), None).unwrap();
        let customer = record.get("customer").unwrap().as_map().unwrap();
        assert_eq!(customer.get("id"), Some(&Value::Int(7)));
        assert_eq!(customer.get("ssn"), Some(&Value::from("123-45")));
    }

    #[test]
    fn list_of_objects() {
        let cart = Cart {
            items: vec![
                User { id: 1, ..User::default() },
                User { id: 2, ..User::default() },
                User { id: 3, ..User::default() },
            ],
            labels: vec!["gift".into()],
        };

        let record = serializer().normalize(&cart, None).unwrap();
        let items = record.get("items").unwrap().as_list().unwrap();
        let ids: Vec<_> = items
            .iter()
            .map(|item| item.as_map().unwrap().get("id").cloned())
            .collect();
        assert_eq!(ids, [Some(Value::Int(1)), Some(Value::Int(2)), Some(Value::Int(3))]);
        assert_eq!(record.get("labels"), Some(&Value::from(vec!["gift"])));
    }

    #[test]
    fn list_items_share_the_view_path() {
        let view: View = serde_json::from_str(r#"[{"items": ["id"]}]"#).unwrap();
        let context = Context::new().with_view(view);
        let cart = Cart {
            items: vec![ann(), ann()],
            labels: Vec::new(),
        };

        let record = serializer().normalize(&cart, Some(&context)).unwrap();
        assert_eq!(keys(&record), ["items"]);
        for item in record.get("items").unwrap().as_list().unwrap() {
            assert_eq!(keys(item.as_map().unwrap()), ["id"]);
        }
    }

    #[test]
    fn registered_normalizer_for_nested_values() {
        let serializer = Serializer::builder()
            .with_normalizer_fn::<Timestamp>(|value, scope| {
                if scope.navigator().to_string() != "at" {
                    return Err(Error::custom(format!("unexpected path {}", scope.navigator())));
                }
                let ts = value
                    .downcast_ref::<Timestamp>()
                    .ok_or_else(|| Error::custom("not a timestamp"))?;
                Ok(Value::String(format!("@{}", ts.secs)))
            })
            .build();

        let event = Event {
            name: "launch".into(),
            at: Timestamp { secs: 5 },
        };
        let record = serializer.normalize(&event, None).unwrap();
        assert_eq!(record.get("at"), Some(&Value::from("@5")));

        // The root object is always walked.
        let record = serializer.normalize(&Timestamp { secs: 5 }, None).unwrap();
        assert_eq!(record.get("secs"), Some(&Value::Int(5)));
    }

    #[test]
    fn context_is_reusable_after_an_error() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("User")
                .with_property("name", PropertyConfiguration::new().with_getter("display")),
        );
        let view: View = serde_json::from_str(r#"["id", {"customer": ["name"]}]"#).unwrap();
        let context = context(metadata).with_view(view);
        let serializer = serializer();

        let mut broken = order();
        broken.customer.id = 0;
        let err = serializer.normalize(&broken, Some(&context)).unwrap_err();
        assert!(matches!(&err, Error::User(source) if source.to_string() == "anonymous user"));

        let record = serializer.normalize(&order(), Some(&context)).unwrap();
        assert_eq!(keys(&record), ["id", "customer"]);
        let customer = record.get("customer").unwrap().as_map().unwrap();
        assert_eq!(keys(customer), ["name"]);
        assert_eq!(customer.get("name"), Some(&Value::from("Ann (#7)")));
    }

    // -------------------------------------------------------------------------
    // Denormalize

    #[test]
    fn nested_class_is_instantiated() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("Order")
                .with_property("customer", PropertyConfiguration::new().with_class("User")),
        );
        let context = context(metadata);

        let data = record(r#"{"id": 3, "customer": {"id": 9, "name": "Bob"}}"#);
        let order: Order = serializer().denormalize_into(&data, Some(&context)).unwrap();

        assert_eq!(order.id, 3);
        assert_eq!(order.customer.id, 9);
        assert_eq!(order.customer.name, "Bob");
        assert!(order.note.is_empty());
    }

    #[test]
    fn nested_map_without_metadata_is_rejected() {
        let data = record(r#"{"customer": {"id": 9}}"#);
        let err = serializer()
            .denormalize_into::<Order>(&data, None)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Access(AccessError::Convert {
                source: ConvertError::Mismatch { .. },
                ..
            })
        ));
    }

    #[test]
    fn unknown_nested_class() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("Order")
                .with_property("customer", PropertyConfiguration::new().with_class("Client")),
        );
        let context = context(metadata);

        let data = record(r#"{"customer": {"id": 9}}"#);
        let err = serializer()
            .denormalize_into::<Order>(&data, Some(&context))
            .unwrap_err();
        assert!(matches!(
            &err,
            Error::Instantiate { class, property, .. } if class == "Client" && property == "customer"
        ));
    }

    #[test]
    fn list_of_maps_with_class() {
        let metadata = MetadataCollection::new().with(
            ClassMetadata::new("Cart")
                .with_property("items", PropertyConfiguration::new().with_class("User")),
        );
        let context = context(metadata);

        let data = record(r#"{"items": [{"id": 1}, {"id": 2, "name": "Bo"}]}"#);
        let cart: Cart = serializer().denormalize_into(&data, Some(&context)).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].id, 1);
        assert_eq!(cart.items[1].name, "Bo");
    }

    #[test]
    fn denormalizer_function() {
        let metadata = MetadataCollection::new().with(ClassMetadata::new("Cart").with_property(
            "labels",
            PropertyConfiguration::new().with_denormalizer(|raw, target, _| {
                assert_eq!(target.class_info().type_name(), "Cart");
                let labels = raw
                    .as_list()
                    .unwrap_or_default()
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|label| Value::from(label.to_uppercase()))
                    .collect::<Vec<_>>();
                Ok(Value::List(labels).into())
            }),
        ));
        let context = context(metadata);

        let data = record(r#"{"labels": ["a", "b"]}"#);
        let cart: Cart = serializer().denormalize_into(&data, Some(&context)).unwrap();
        assert_eq!(cart.labels, ["A", "B"]);
    }

    #[test]
    fn denormalizer_error_is_a_user_error() {
        let metadata = MetadataCollection::new().with(ClassMetadata::new("Cart").with_property(
            "labels",
            PropertyConfiguration::new().with_denormalizer(|_, _, _| Err("bad labels".into())),
        ));
        let context = context(metadata);

        let data = record(r#"{"labels": ["a"]}"#);
        let err = serializer()
            .denormalize_into::<Cart>(&data, Some(&context))
            .unwrap_err();
        assert!(matches!(&err, Error::User(source) if source.to_string() == "bad labels"));
    }

    fn reading_context() -> Context {
        context(
            MetadataCollection::new().with(
                ClassMetadata::new("Reading")
                    .with_property("count", PropertyConfiguration::new().with_type("int"))
                    .with_property("ratio", PropertyConfiguration::new().with_type("float"))
                    .with_property("maybe", PropertyConfiguration::new().with_type("int"))
                    .with_property("raw", PropertyConfiguration::new().with_type("decimal")),
            ),
        )
    }

    #[test]
    fn coercion() {
        let serializer = serializer();
        let context = reading_context();

        let reading: Reading = serializer
            .denormalize_into(&record(r#"{"count": "42", "ratio": "0.5"}"#), Some(&context))
            .unwrap();
        assert_eq!(reading.count, 42);
        assert_eq!(reading.ratio, 0.5);

        let reading: Reading = serializer
            .denormalize_into(&record(r#"{"count": 42, "ratio": 2}"#), Some(&context))
            .unwrap();
        assert_eq!(reading.count, 42);
        assert_eq!(reading.ratio, 2.0);

        let reading: Reading = serializer
            .denormalize_into(&record(r#"{"count": "3.7", "maybe": null}"#), Some(&context))
            .unwrap();
        assert_eq!(reading.count, 3);
        assert_eq!(reading.maybe, None);
    }

    #[test]
    fn coercion_failure() {
        let err = serializer()
            .denormalize_into::<Reading>(&record(r#"{"count": "abc"}"#), Some(&reading_context()))
            .unwrap_err();
        match err {
            Error::Coercion {
                class,
                property,
                coercion,
                found,
            } => {
                assert_eq!(class, "Reading");
                assert_eq!(property, "count");
                assert_eq!(coercion, Coercion::Int);
                assert_eq!(found, Value::from("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_coercion_keeps_value() {
        let reading: Reading = serializer()
            .denormalize_into(&record(r#"{"raw": "12.50"}"#), Some(&reading_context()))
            .unwrap();
        assert_eq!(reading.raw, Value::from("12.50"));
    }

    #[test]
    fn only_numeric_tags_convert() {
        let context = context(
            MetadataCollection::new().with(
                ClassMetadata::new("Flags")
                    .with_property("label", PropertyConfiguration::new().with_type("string"))
                    .with_property("enabled", PropertyConfiguration::new().with_type("bool")),
            ),
        );

        let flags: Flags = serializer()
            .denormalize_into(&record(r#"{"label": 42, "enabled": "maybe"}"#), Some(&context))
            .unwrap();
        assert_eq!(flags.label, Value::Int(42));
        assert_eq!(flags.enabled, Value::from("maybe"));
    }

    #[test]
    fn raw_values_without_context() {
        // No coercion without metadata.
        let err = serializer()
            .denormalize_into::<Reading>(&record(r#"{"count": "42"}"#), None)
            .unwrap_err();
        assert!(matches!(err, Error::Access(AccessError::Convert { .. })));
    }

    #[test]
    fn writing_private_property_fails() {
        let data = record(r#"{"id": 5, "secret": "x"}"#);
        let mut target = Order::default();
        let err = serializer()
            .denormalize(&data, &mut target, None)
            .unwrap_err();

        assert!(matches!(err, Error::Access(AccessError::PrivateProperty { .. })));
        // Written before the failure.
        assert_eq!(target.id, 5);
    }
}
