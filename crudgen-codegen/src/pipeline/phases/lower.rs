//! Lower phase - builds the class metamodel from the manifest.
//!
//! This is the metamodel extractor: it resolves inherited methods, normalizes
//! written types and converts markers, then lets the metamodel classify
//! properties.

use std::collections::HashSet;

use crudgen_ir::{
    ClassModel, Marker, MarkerValue, Metamodel, MethodModel, NestingKind, TypeModel, Visibility,
    is_builtin_constraint, marker::names,
};
use crudgen_manifest::{ClassDecl, MarkerArg, MarkerEntry, Manifest, MethodDecl, Nesting};
use eyre::Result;
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that builds the [`Metamodel`] from the manifest.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Build class models from the manifest"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let metamodel = lower_manifest(&ctx.manifest);
        debug!(classes = metamodel.len(), "metamodel built");
        ctx.metamodel = Some(metamodel);
        Ok(())
    }
}

/// Lower a manifest into a metamodel, one class model per `[[class]]` entry.
fn lower_manifest(manifest: &Manifest) -> Metamodel {
    let lowering = Lowering::new(manifest);
    let mut metamodel = Metamodel::new();

    for class in &manifest.classes {
        let model = lowering.lower_class(class);
        debug!(
            class = %model.qualified_name,
            properties = model.properties.len(),
            codegen = model.is_codegen(),
            "modelled class"
        );
        metamodel.insert(model);
    }
    metamodel
}

struct Lowering<'a> {
    manifest: &'a Manifest,
    /// Annotation types declared as validation constraints
    constraints: HashSet<&'a str>,
}

impl<'a> Lowering<'a> {
    fn new(manifest: &'a Manifest) -> Self {
        let constraints = manifest
            .annotations
            .iter()
            .filter(|a| a.has_marker(names::CONSTRAINT))
            .map(|a| a.name.as_str())
            .collect();
        Self {
            manifest,
            constraints,
        }
    }

    fn lower_class(&self, class: &ClassDecl) -> ClassModel {
        let markers = self.lower_markers(&class.markers);
        let methods = self.collect_methods(class);

        ClassModel::new(&class.package, &class.name, &markers, &methods)
            .with_visibility(lower_visibility(class.visibility))
            .with_abstract(class.is_abstract)
            .with_nesting(lower_nesting(class.nesting))
    }

    /// Methods of the class and its declared ancestors, ancestor-first.
    ///
    /// A method with the same name and parameters as an inherited one
    /// replaces it in place.
    fn collect_methods(&self, class: &ClassDecl) -> Vec<MethodModel> {
        let mut lineage = vec![class];
        let mut seen = HashSet::from([class.qualified_name()]);
        let mut current = class;
        while let Some(parent) = current
            .qualified_extends()
            .and_then(|name| self.manifest.class(&name))
        {
            if !seen.insert(parent.qualified_name()) {
                break;
            }
            lineage.push(parent);
            current = parent;
        }

        let mut methods: Vec<MethodModel> = Vec::new();
        for decl in lineage.iter().rev() {
            for method in &decl.methods {
                let model = self.lower_method(method);
                match methods.iter_mut().find(|m| m.same_signature(&model)) {
                    Some(inherited) => *inherited = model,
                    None => methods.push(model),
                }
            }
        }
        methods
    }

    fn lower_method(&self, method: &MethodDecl) -> MethodModel {
        let mut model = MethodModel::new(&method.name, TypeModel::normalize(&method.returns))
            .with_static(method.is_static);
        for param in &method.params {
            model = model.with_param(TypeModel::normalize(param));
        }
        for marker in self.lower_markers(&method.markers) {
            model = model.with_marker(marker);
        }
        model
    }

    fn lower_markers(&self, entries: &[MarkerEntry]) -> Vec<Marker> {
        entries.iter().map(|entry| self.lower_marker(entry)).collect()
    }

    fn lower_marker(&self, entry: &MarkerEntry) -> Marker {
        let name = entry.name();
        let constraint = self.constraints.contains(name) || is_builtin_constraint(name);

        entry.args().fold(
            Marker::new(name).with_constraint(constraint),
            |marker, (key, value)| marker.with_value(key, lower_marker_arg(value)),
        )
    }
}

fn lower_marker_arg(arg: &MarkerArg) -> MarkerValue {
    match arg {
        MarkerArg::Bool(b) => MarkerValue::Bool(*b),
        MarkerArg::Int(i) => MarkerValue::Int(*i),
        MarkerArg::Float(f) => MarkerValue::Float(*f),
        MarkerArg::Str(s) => MarkerValue::Str(s.clone()),
        MarkerArg::List(items) => MarkerValue::List(items.iter().map(lower_marker_arg).collect()),
    }
}

fn lower_visibility(visibility: crudgen_manifest::Visibility) -> Visibility {
    match visibility {
        crudgen_manifest::Visibility::Public => Visibility::Public,
        crudgen_manifest::Visibility::Protected => Visibility::Protected,
        crudgen_manifest::Visibility::Package => Visibility::Package,
        crudgen_manifest::Visibility::Private => Visibility::Private,
    }
}

fn lower_nesting(nesting: Nesting) -> NestingKind {
    match nesting {
        Nesting::TopLevel => NestingKind::TopLevel,
        Nesting::Member => NestingKind::Member,
        Nesting::Local => NestingKind::Local,
        Nesting::Anonymous => NestingKind::Anonymous,
    }
}

#[cfg(test)]
mod tests {
    use crudgen_ir::{PrimitiveKind, PropertyRole};

    use super::*;

    fn lower(content: &str) -> Metamodel {
        let manifest: Manifest = content.parse().expect("Failed to parse test manifest");
        let mut ctx = CompilationContext::new(manifest);
        LowerPhase.run(&mut ctx).expect("lower should succeed");
        ctx.metamodel.expect("metamodel should be set")
    }

    const SHOP: &str = r#"
        [[annotation]]
        name = "com.example.validation.Sku"
        markers = ["jakarta.validation.Constraint"]

        [[class]]
        package = "com.example"
        name = "BaseEntity"
        abstract = true

        [[class.method]]
        name = "getId"
        returns = "java.lang.Long"
        markers = ["jakarta.persistence.Id", "jakarta.persistence.GeneratedValue"]

        [[class.method]]
        name = "setId"
        params = ["java.lang.Long"]

        [[class.method]]
        name = "getVersion"
        returns = "int"
        markers = ["jakarta.persistence.Version"]

        [[class]]
        package = "com.example"
        name = "Product"
        extends = "BaseEntity"
        markers = ["jakarta.persistence.Entity", "mx.com.inftel.codegen.Codegen"]

        [[class.method]]
        name = "getSku"
        returns = "String"
        markers = [
            { type = "jakarta.persistence.Column", args = { nullable = false, updatable = false } },
            "com.example.validation.Sku",
            { type = "jakarta.validation.constraints.Size", args = { max = 12 } },
            "com.example.Audited",
        ]

        [[class.method]]
        name = "setSku"
        params = ["String"]

        [[class.method]]
        name = "getVersion"
        returns = "int"

        [[class.method]]
        name = "getInstance"
        returns = "com.example.Product"
        static = true
    "#;

    #[test]
    fn test_lower_phase_populates_metamodel() {
        let metamodel = lower(SHOP);
        assert_eq!(metamodel.len(), 2);

        let base = metamodel.get("com.example.BaseEntity").unwrap();
        assert!(base.is_abstract);
        assert!(!base.is_codegen());
    }

    #[test]
    fn test_inherited_methods_come_first() {
        let metamodel = lower(SHOP);
        let product = metamodel.get("com.example.Product").unwrap();

        let names: Vec<&str> = product.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "version", "sku"]);

        let id = product.id_property().unwrap();
        assert!(id.generated);
        assert_eq!(id.property_type, TypeModel::Boxed(PrimitiveKind::Long));
    }

    #[test]
    fn test_override_replaces_inherited_method_in_place() {
        let metamodel = lower(SHOP);
        let product = metamodel.get("com.example.Product").unwrap();

        // The redeclared getter carries no markers, so the version flag is gone
        let version = product.property("version").unwrap();
        assert!(!version.version);
        assert_eq!(product.properties[1].name, "version");
    }

    #[test]
    fn test_markers_and_constraints() {
        let metamodel = lower(SHOP);
        let product = metamodel.get("com.example.Product").unwrap();
        let sku = product.property("sku").unwrap();

        match sku.role {
            PropertyRole::Column(attrs) => {
                assert!(!attrs.nullable);
                assert!(attrs.insertable);
                assert!(!attrs.updatable);
            }
            other => panic!("expected column role, got {:?}", other),
        }

        let validations: Vec<&str> = sku.validations.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            validations,
            vec![
                "com.example.validation.Sku",
                "jakarta.validation.constraints.Size"
            ]
        );
        assert_eq!(
            sku.validations[1].to_java(),
            "@jakarta.validation.constraints.Size(max = 12)"
        );
    }

    #[test]
    fn test_static_methods_are_not_properties() {
        let metamodel = lower(SHOP);
        let product = metamodel.get("com.example.Product").unwrap();
        assert!(product.property("instance").is_none());
    }

    #[test]
    fn test_visibility_and_nesting() {
        let metamodel = lower(
            r#"
            [[class]]
            name = "Hidden"
            visibility = "package"
            nesting = "member"
            markers = ["jakarta.persistence.Entity"]
        "#,
        );

        let hidden = metamodel.get("Hidden").unwrap();
        assert_eq!(hidden.visibility, Visibility::Package);
        assert_eq!(hidden.nesting, NestingKind::Member);
        assert!(!hidden.is_crud_eligible());
    }

    #[test]
    fn test_inheritance_cycle_terminates() {
        let metamodel = lower(
            r#"
            [[class]]
            name = "A"
            extends = "B"

            [[class.method]]
            name = "getA"
            returns = "int"

            [[class]]
            name = "B"
            extends = "A"

            [[class.method]]
            name = "getB"
            returns = "int"
        "#,
        );

        let a = metamodel.get("A").unwrap();
        let names: Vec<&str> = a.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_lower_marker_arg_lists() {
        let arg = MarkerArg::List(vec![MarkerArg::Str("a".into()), MarkerArg::Int(2)]);
        assert_eq!(
            lower_marker_arg(&arg),
            MarkerValue::List(vec![MarkerValue::Str("a".into()), MarkerValue::Int(2)])
        );
    }
}
