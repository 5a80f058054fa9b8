//! Unit tests for factory method validation and invocation

use std::sync::Mutex;

use wirebox_domain::ports::MethodInvoker;
use wirebox_domain::{Error, FactoryMethod, MetaMethod, MethodKind, ObjectHandle, Result, Type};

struct RecordingInvoker {
    produced: ObjectHandle,
    calls: Mutex<Vec<String>>,
}

impl MethodInvoker for RecordingInvoker {
    fn invoke_factory(&self, method: &MetaMethod, _target: &ObjectHandle) -> Result<ObjectHandle> {
        self.calls.lock().unwrap().push(method.signature());
        Ok(self.produced.clone())
    }

    fn invoke_setter(
        &self,
        method: &MetaMethod,
        _target: &ObjectHandle,
        _argument: &ObjectHandle,
    ) -> Result<()> {
        Err(Error::invocation(method.signature(), "not a setter invoker"))
    }
}

fn types() -> (Type, Type, Type) {
    let root = Type::root();
    let factory = Type::derive("Factory", &root);
    let product = Type::derive("Product", &root);
    (root, factory, product)
}

#[test]
fn test_valid_factory_method() {
    let (_, factory, product) = types();
    let method = MetaMethod::new(&factory, "create", MethodKind::Method).returning("Product");
    let factory_method = FactoryMethod::try_new(method, Some(product.clone())).unwrap();

    assert_eq!(factory_method.object_type(), &factory);
    assert_eq!(factory_method.result_type(), &product);
    assert_eq!(factory_method.method().name(), "create");
}

#[test]
fn test_equality_is_on_type_pair() {
    let (_, factory, product) = types();
    let create = MetaMethod::new(&factory, "create", MethodKind::Method).returning("Product");
    let make = MetaMethod::new(&factory, "make", MethodKind::Slot).returning("Product");

    let first = FactoryMethod::try_new(create, Some(product.clone())).unwrap();
    let second = FactoryMethod::try_new(make, Some(product)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rejects_ill_formed_candidates() {
    let (root, factory, product) = types();

    let signal = MetaMethod::new(&factory, "created", MethodKind::Signal).returning("Product");
    assert!(matches!(
        FactoryMethod::try_new(signal, Some(product.clone())),
        Err(Error::InvalidFactoryMethod { .. })
    ));

    let with_args = MetaMethod::new(&factory, "create", MethodKind::Method)
        .with_parameter("int")
        .returning("Product");
    assert!(matches!(
        FactoryMethod::try_new(with_args, Some(product)),
        Err(Error::InvalidFactoryMethod { .. })
    ));

    let untyped = MetaMethod::new(&factory, "create", MethodKind::Method).returning("int");
    assert!(matches!(
        FactoryMethod::try_new(untyped, None),
        Err(Error::InvalidFactoryMethod { .. })
    ));

    let rooted = MetaMethod::new(&factory, "create", MethodKind::Method).returning("Object");
    assert!(matches!(
        FactoryMethod::try_new(rooted, Some(root)),
        Err(Error::InvalidFactoryMethod { .. })
    ));
}

#[test]
fn test_invoke_forwards_to_invoker() {
    let (_, factory, product) = types();
    let method = MetaMethod::new(&factory, "create", MethodKind::Method).returning("Product");
    let factory_method = FactoryMethod::try_new(method, Some(product)).unwrap();

    let produced = ObjectHandle::new(String::from("product"));
    let invoker = RecordingInvoker {
        produced: produced.clone(),
        calls: Mutex::new(Vec::new()),
    };

    let result = factory_method
        .invoke(&invoker, &ObjectHandle::new(()))
        .unwrap();
    assert_eq!(result, produced);
    assert_eq!(*invoker.calls.lock().unwrap(), vec!["create()".to_string()]);
}
