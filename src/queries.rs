//! Static validation queries for the manufacturing knowledge graph
//!
//! The battery covers data loading, inventory, production/quality joins,
//! aggregation, filtering, and referential integrity.

/// Default Fuseki dataset endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3030/manufacturing/sparql";

/// Namespace prefixes prepended to every query.
pub const PREFIXES: &str = "\
PREFIX mfg: <http://example.org/manufacturing#>
PREFIX ex: <http://example.org/manufacturing/data/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>
";

/// One named query from the validation battery.
#[derive(Debug, Clone, Copy)]
pub struct TestQuery {
    /// Display name
    pub name: &'static str,
    /// What the query checks
    pub description: &'static str,
    /// SPARQL text, without prefixes
    pub query: &'static str,
}

/// The fixed battery, in execution order.
pub const TEST_QUERIES: &[TestQuery] = &[
    TestQuery {
        name: "Entity Count Validation",
        description: "Count all entity types to verify data loading",
        query: r#"
SELECT ?type (COUNT(?entity) as ?count) WHERE {
  ?entity a ?type .
  FILTER(?type IN (mfg:Machine, mfg:ProductionRun, mfg:QualityMeasurement, mfg:Location))
} GROUP BY ?type ORDER BY ?type
"#,
    },
    TestQuery {
        name: "Machine Inventory",
        description: "List all machines with basic properties",
        query: r#"
SELECT ?machineID ?type ?location WHERE {
  ?machine a mfg:Machine ;
           mfg:machineID ?machineID ;
           mfg:machineType ?type ;
           mfg:locationName ?location .
} ORDER BY ?machineID
"#,
    },
    TestQuery {
        name: "Production Summary",
        description: "Production runs with quality scores",
        query: r#"
SELECT ?productionID ?machineID ?quantity ?qualityScore WHERE {
  ?production a mfg:ProductionRun ;
              mfg:productionID ?productionID ;
              mfg:outputQuantity ?quantity ;
              mfg:producedBy ?machine ;
              mfg:hasQualityMeasurement ?qm .
  ?machine mfg:machineID ?machineID .
  ?qm mfg:qualityScore ?qualityScore .
} ORDER BY DESC(?qualityScore) LIMIT 10
"#,
    },
    TestQuery {
        name: "Quality Analysis",
        description: "Average quality by machine type",
        query: r#"
SELECT ?machineType
       (COUNT(?production) as ?productionCount)
       (AVG(?qualityScore) as ?avgQuality)
       (MIN(?qualityScore) as ?minQuality)
       (MAX(?qualityScore) as ?maxQuality) WHERE {
  ?machine a mfg:Machine ;
           mfg:machineType ?machineType ;
           mfg:hasProduction ?production .
  ?production mfg:hasQualityMeasurement ?qm .
  ?qm mfg:qualityScore ?qualityScore .
} GROUP BY ?machineType
ORDER BY DESC(?avgQuality)
"#,
    },
    TestQuery {
        name: "High Quality Productions",
        description: "Productions with quality >= 95",
        query: r#"
SELECT ?productionID ?machineType ?qualityScore ?outputQuantity WHERE {
  ?production a mfg:ProductionRun ;
              mfg:productionID ?productionID ;
              mfg:outputQuantity ?outputQuantity ;
              mfg:producedBy ?machine ;
              mfg:hasQualityMeasurement ?qm .
  ?machine mfg:machineType ?machineType .
  ?qm mfg:qualityScore ?qualityScore .
  FILTER(?qualityScore >= 95.0)
} ORDER BY DESC(?qualityScore)
"#,
    },
    TestQuery {
        name: "Relationship Integrity Check",
        description: "Verify all productions have machines",
        query: r#"
SELECT ?production WHERE {
  ?production a mfg:ProductionRun .
  FILTER NOT EXISTS { ?production mfg:producedBy ?machine }
}
"#,
    },
];
