//! Shared fixtures for wirebox-application tests
//!
//! Builds real `InMemoryTypeCatalog`s from wirebox-providers rather than
//! mocking the introspector.

#![allow(dead_code)] // Not every fixture is used by every test file

use std::sync::Arc;

use wirebox_domain::{
    Dependency, MetaMethod, MethodKind, SetterMethod, Type, TypesByName,
};
use wirebox_providers::introspection::InMemoryTypeCatalog;

/// Catalog plus the registry of known types
pub struct Fixture {
    pub catalog: Arc<InMemoryTypeCatalog>,
    pub known_types: TypesByName,
}

impl Fixture {
    /// Declared type by name
    pub fn t(&self, name: &str) -> Type {
        self.catalog
            .type_named(name)
            .unwrap_or_else(|| panic!("type {name} is not declared"))
    }

    /// Dependency equal to what extraction builds for `owner::setter(parameter)`
    pub fn setter_dependency(&self, owner: &str, setter: &str, parameter: &str) -> Dependency {
        let method = MetaMethod::new(&self.t(owner), setter, MethodKind::Slot)
            .with_parameter(format!("{parameter}*"))
            .injectable();
        Dependency::from_setter(SetterMethod::try_new(method, Some(self.t(parameter))).unwrap())
    }
}

fn inject(owner: &Type, name: &str, kind: MethodKind, parameters: &[&str]) -> MetaMethod {
    MetaMethod::new(owner, name, kind)
        .with_parameters(parameters.iter().map(|p| format!("{p}*")))
        .injectable()
}

/// Types and setters covering every dependency extraction scenario
pub fn dependencies_fixture() -> Fixture {
    let mut catalog = InMemoryTypeCatalog::new();
    let declare = |catalog: &mut InMemoryTypeCatalog, name: &str, parent: Option<&str>| {
        catalog.add_type(name, parent).unwrap()
    };

    declare(&mut catalog, "InjectableType1", None);
    declare(&mut catalog, "SubInjectableType1A", Some("InjectableType1"));
    declare(&mut catalog, "SubInjectableType1B", Some("InjectableType1"));
    declare(&mut catalog, "InjectableType2", None);
    declare(&mut catalog, "InjectableType3", None);
    declare(&mut catalog, "UnregisteredType", None);

    let valid = declare(&mut catalog, "ValidInjectedType", None);
    for method in [
        inject(&valid, "setter_1", MethodKind::Method, &["InjectableType1"]),
        inject(&valid, "setter_2", MethodKind::Slot, &["InjectableType2"]),
        MetaMethod::new(&valid, "no_injection_setter_1", MethodKind::Slot)
            .with_parameter("InjectableType1*"),
        MetaMethod::new(&valid, "no_injection_setter_2", MethodKind::Slot)
            .with_parameter("InjectableType2*"),
        MetaMethod::new(&valid, "no_injection_setter_3", MethodKind::Slot).with_parameter("int"),
    ] {
        catalog.add_method(method).unwrap();
    }

    let inheriting = declare(&mut catalog, "InheritingValidInjectedType", Some("ValidInjectedType"));
    catalog
        .add_method(inject(&inheriting, "setter_3", MethodKind::Slot, &["InjectableType3"]))
        .unwrap();

    let common = declare(&mut catalog, "ValidInjectedTypeWithCommonSuperclass", None);
    catalog
        .add_method(inject(&common, "setter_1", MethodKind::Method, &["SubInjectableType1A"]))
        .unwrap();
    catalog
        .add_method(inject(&common, "setter_2", MethodKind::Slot, &["SubInjectableType1B"]))
        .unwrap();

    let duplicate = declare(&mut catalog, "DuplicateDependencyInjectedType", None);
    catalog
        .add_method(inject(&duplicate, "setter_1", MethodKind::Method, &["InjectableType1"]))
        .unwrap();
    catalog
        .add_method(inject(&duplicate, "setter_2", MethodKind::Slot, &["InjectableType1"]))
        .unwrap();

    let superclass = declare(&mut catalog, "InjectedTypeWithSuperclass", None);
    catalog
        .add_method(inject(&superclass, "setter_1", MethodKind::Method, &["InjectableType1"]))
        .unwrap();
    catalog
        .add_method(inject(&superclass, "setter_2", MethodKind::Slot, &["SubInjectableType1A"]))
        .unwrap();

    let inverted = declare(&mut catalog, "InjectedTypeWithSuperclassInverted", None);
    catalog
        .add_method(inject(&inverted, "setter_2", MethodKind::Method, &["SubInjectableType1A"]))
        .unwrap();
    catalog
        .add_method(inject(&inverted, "setter_1", MethodKind::Slot, &["InjectableType1"]))
        .unwrap();

    let on_self = declare(&mut catalog, "DependsOnSelf", None);
    catalog
        .add_method(inject(&on_self, "setter_0", MethodKind::Slot, &["InjectableType2"]))
        .unwrap();
    catalog
        .add_method(inject(&on_self, "setter_1", MethodKind::Slot, &["DependsOnSelf"]))
        .unwrap();

    let on_subtype = declare(&mut catalog, "DependsOnSubtype", None);
    declare(&mut catalog, "DependsOnSubtypeSubtype", Some("DependsOnSubtype"));
    catalog
        .add_method(inject(&on_subtype, "setter_1", MethodKind::Slot, &["DependsOnSubtypeSubtype"]))
        .unwrap();

    declare(&mut catalog, "DependsOnSupertypeSupertype", None);
    let on_supertype = declare(&mut catalog, "DependsOnSupertype", Some("DependsOnSupertypeSupertype"));
    catalog
        .add_method(inject(&on_supertype, "setter_1", MethodKind::Slot, &["DependsOnSupertypeSupertype"]))
        .unwrap();

    let empty = declare(&mut catalog, "InvalidSetterEmptyType", None);
    catalog
        .add_method(
            MetaMethod::new(&empty, "setter_int", MethodKind::Slot)
                .with_parameter("int")
                .injectable(),
        )
        .unwrap();

    let root_typed = declare(&mut catalog, "InvalidSetterRootType", None);
    catalog
        .add_method(inject(&root_typed, "setter_object", MethodKind::Slot, &["Object"]))
        .unwrap();

    let unregistered = declare(&mut catalog, "InvalidSetterUnregisteredType", None);
    catalog
        .add_method(inject(&unregistered, "setter_unregistered", MethodKind::Slot, &["UnregisteredType"]))
        .unwrap();

    let no_parameters = declare(&mut catalog, "InvalidSetterNoParameters", None);
    catalog
        .add_method(inject(&no_parameters, "setter_no_parameters", MethodKind::Slot, &[]))
        .unwrap();

    let two_parameters = declare(&mut catalog, "InvalidSetterTwoParameters", None);
    catalog
        .add_method(inject(
            &two_parameters,
            "setter_two_parameters",
            MethodKind::Slot,
            &["InjectableType1", "InjectableType2"],
        ))
        .unwrap();

    let signal = declare(&mut catalog, "InvalidSetterIsSignal", None);
    catalog
        .add_method(inject(&signal, "setter_signal", MethodKind::Signal, &["InjectableType1"]))
        .unwrap();

    let known_types = catalog
        .known_types()
        .iter()
        .filter(|t| t.name() != "UnregisteredType")
        .cloned()
        .collect();

    Fixture {
        catalog: Arc::new(catalog),
        known_types,
    }
}

/// Interface and factory types covering factory method resolution
pub fn factories_fixture() -> Fixture {
    let mut catalog = InMemoryTypeCatalog::new();

    catalog.add_type("Interface", None).unwrap();
    catalog.add_type("Implementation", Some("Interface")).unwrap();
    catalog.add_type("SubImplementation", Some("Implementation")).unwrap();
    catalog.add_type("Unrelated", None).unwrap();

    let single = catalog.add_type("SingleFactory", None).unwrap();
    for method in [
        MetaMethod::new(&single, "create_implementation", MethodKind::Method)
            .returning("Implementation*"),
        MetaMethod::new(&single, "create_unrelated_with_arg", MethodKind::Method)
            .with_parameter("int")
            .returning("Implementation*"),
        MetaMethod::new(&single, "count", MethodKind::Method).returning("int"),
        MetaMethod::new(&single, "reset", MethodKind::Slot),
    ] {
        catalog.add_method(method).unwrap();
    }

    let ambiguous = catalog.add_type("AmbiguousFactory", None).unwrap();
    catalog
        .add_method(
            MetaMethod::new(&ambiguous, "create_implementation", MethodKind::Method)
                .returning("Implementation*"),
        )
        .unwrap();
    catalog
        .add_method(
            MetaMethod::new(&ambiguous, "create_sub_implementation", MethodKind::Slot)
                .returning("SubImplementation*"),
        )
        .unwrap();

    let unrelated = catalog.add_type("UnrelatedFactory", None).unwrap();
    catalog
        .add_method(
            MetaMethod::new(&unrelated, "create_unrelated", MethodKind::Method)
                .returning("Unrelated*"),
        )
        .unwrap();

    catalog
        .add_type("InheritingFactory", Some("UnrelatedFactory"))
        .unwrap();
    let inheriting = catalog.type_named("InheritingFactory").unwrap();
    catalog
        .add_method(
            MetaMethod::new(&inheriting, "create_sub_implementation", MethodKind::Method)
                .returning("SubImplementation*"),
        )
        .unwrap();

    let signalling = catalog.add_type("SignallingFactory", None).unwrap();
    catalog
        .add_method(
            MetaMethod::new(&signalling, "implementation_created", MethodKind::Signal)
                .returning("Implementation*"),
        )
        .unwrap();

    let known_types = catalog.known_types();
    Fixture {
        catalog: Arc::new(catalog),
        known_types,
    }
}
