//! # Service Document and `$metadata`
//!
//! The service document lists the published entity sets; `$metadata` is the
//! CSDL (EDMX XML) description of the product entity type.

use serde::Serialize;

use crate::catalog::{CATEGORY_FIELD, DESCRIPTION_FIELD, ID_FIELD, NAME_FIELD, PRICE_FIELD};

use super::config::ServiceConfig;

/// One declared property of the entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    pub name: &'static str,
    pub edm_type: &'static str,
    pub nullable: bool,
}

/// Properties of the product entity type, key first
pub const PRODUCT_PROPERTIES: &[PropertyDef] = &[
    PropertyDef {
        name: ID_FIELD,
        edm_type: "Edm.Int32",
        nullable: false,
    },
    PropertyDef {
        name: NAME_FIELD,
        edm_type: "Edm.String",
        nullable: true,
    },
    PropertyDef {
        name: DESCRIPTION_FIELD,
        edm_type: "Edm.String",
        nullable: true,
    },
    PropertyDef {
        name: PRICE_FIELD,
        edm_type: "Edm.Decimal",
        nullable: true,
    },
    PropertyDef {
        name: CATEGORY_FIELD,
        edm_type: "Edm.String",
        nullable: true,
    },
];

/// Entry in the service document
#[derive(Debug, Clone, Serialize)]
pub struct EntitySetInfo {
    pub name: String,
    pub kind: &'static str,
    pub url: String,
}

/// Service document (`GET <root>/`)
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDocument {
    #[serde(rename = "@odata.context")]
    pub context: &'static str,
    pub value: Vec<EntitySetInfo>,
}

impl ServiceDocument {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            context: "$metadata",
            value: vec![EntitySetInfo {
                name: config.entity_set.clone(),
                kind: "EntitySet",
                url: config.entity_set.clone(),
            }],
        }
    }
}

/// Render the EDMX document for the configured entity set
pub fn metadata_document(config: &ServiceConfig) -> String {
    let namespace = &config.namespace;
    let entity_type = &config.entity_type;

    let properties: String = PRODUCT_PROPERTIES
        .iter()
        .map(|p| {
            let nullable = if p.nullable { "" } else { r#" Nullable="false""# };
            format!(
                "        <Property Name=\"{}\" Type=\"{}\"{}/>\n",
                p.name, p.edm_type, nullable
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="{namespace}">
      <EntityType Name="{entity_type}">
        <Key>
          <PropertyRef Name="{key}"/>
        </Key>
{properties}      </EntityType>
      <EntityContainer Name="EntityContainer">
        <EntitySet Name="{entity_set}" EntityType="{namespace}.{entity_type}"/>
      </EntityContainer>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#,
        key = ID_FIELD,
        entity_set = config.entity_set,
    )
}
