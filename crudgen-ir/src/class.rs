//! Class models and derived artifact names.

use crudgen_core::{capitalize, qualify};
use serde::Serialize;

use crate::{Marker, MethodModel, PropertyModel, marker::names, pair_accessors};

/// Declared visibility of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

/// Where a class is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NestingKind {
    #[default]
    TopLevel,
    Member,
    Local,
    Anonymous,
}

/// Artifact name overrides configured on the generation marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodegenOverrides {
    pub crud: Option<String>,
    pub dto: Option<String>,
    pub dti: Option<String>,
}

impl CodegenOverrides {
    pub fn from_marker(marker: &Marker) -> Self {
        let read = |key: &str| marker.str_value(key).map(str::to_string);
        Self {
            crud: read("crud"),
            dto: read("dto"),
            dti: read("dti"),
        }
    }
}

/// One persistent class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassModel {
    pub name: String,
    /// Enclosing package; empty for the default package.
    pub package: String,
    pub qualified_name: String,
    pub capitalized_name: String,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub nesting: NestingKind,
    pub is_entity: bool,
    pub is_embeddable: bool,
    /// Present when the class opts into generation.
    pub codegen: Option<CodegenOverrides>,
    pub properties: Vec<PropertyModel>,
}

impl ClassModel {
    /// Build a public top-level class model from its markers and its
    /// methods (inherited ones included, ancestor-first).
    pub fn new(package: &str, name: &str, markers: &[Marker], methods: &[MethodModel]) -> Self {
        let has = |marker: &str| markers.iter().any(|m| m.is(marker));
        let properties = pair_accessors(methods)
            .iter()
            .map(PropertyModel::from_pair)
            .collect();

        let package = package.trim();

        Self {
            name: name.to_string(),
            package: package.to_string(),
            qualified_name: qualify(package, name),
            capitalized_name: capitalize(name),
            visibility: Visibility::Public,
            is_abstract: false,
            nesting: NestingKind::TopLevel,
            is_entity: has(names::ENTITY),
            is_embeddable: has(names::EMBEDDABLE),
            codegen: markers
                .iter()
                .find(|m| m.is(names::CODEGEN))
                .map(CodegenOverrides::from_marker),
            properties,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_nesting(mut self, nesting: NestingKind) -> Self {
        self.nesting = nesting;
        self
    }

    pub fn is_codegen(&self) -> bool {
        self.codegen.is_some()
    }

    pub fn crud_name(&self) -> String {
        self.artifact_name(|o| o.crud.as_deref(), "CRUD")
    }

    pub fn dto_name(&self) -> String {
        self.artifact_name(|o| o.dto.as_deref(), "DTO")
    }

    pub fn dti_name(&self) -> String {
        self.artifact_name(|o| o.dti.as_deref(), "DTI")
    }

    pub fn qualified_crud_name(&self) -> String {
        qualify(&self.package, &self.crud_name())
    }

    pub fn qualified_dto_name(&self) -> String {
        qualify(&self.package, &self.dto_name())
    }

    pub fn qualified_dti_name(&self) -> String {
        qualify(&self.package, &self.dti_name())
    }

    /// The identity property; the first one wins.
    pub fn id_property(&self) -> Option<&PropertyModel> {
        self.properties.iter().find(|p| p.id)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyModel> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Another property already uses the transfer name of `relation`
    /// (`owner` is carried as `ownerId`).
    pub fn relation_id_taken(&self, relation: &PropertyModel) -> bool {
        self.property(&format!("{}Id", relation.name)).is_some()
    }

    /// An entity that is top-level, public and concrete.
    pub fn is_crud_eligible(&self) -> bool {
        self.is_entity && self.is_generatable()
    }

    /// An entity or embeddable that is top-level, public and concrete.
    pub fn is_transfer_eligible(&self) -> bool {
        (self.is_entity || self.is_embeddable) && self.is_generatable()
    }

    fn is_generatable(&self) -> bool {
        self.nesting == NestingKind::TopLevel
            && self.visibility == Visibility::Public
            && !self.is_abstract
    }

    fn artifact_name(
        &self,
        select: impl Fn(&CodegenOverrides) -> Option<&str>,
        suffix: &str,
    ) -> String {
        self.codegen
            .as_ref()
            .and_then(select)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}{}", self.name, suffix))
    }
}
