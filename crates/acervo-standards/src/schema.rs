//! Per-kind column templates.
//!
//! Column order and the required subset follow the INBCM spreadsheet models
//! distributed to institutions. Slugs are written out by hand; the
//! `template_labels_fold_to_slugs` test keeps them in sync with the labels.

use acervo_model::RecordKind;
use serde::Serialize;

/// Expected columns and mandatory fields for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub kind: RecordKind,
    /// Exact column order of the template.
    pub expected_headers: &'static [&'static str],
    /// Columns that must be filled in every row. Subset of `expected_headers`.
    pub required_fields: &'static [&'static str],
}

impl Schema {
    pub fn column_count(&self) -> usize {
        self.expected_headers.len()
    }

    pub fn is_required(&self, slug: &str) -> bool {
        self.required_fields.iter().any(|f| *f == slug)
    }

    /// 0-based column index of `slug`.
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.expected_headers.iter().position(|h| *h == slug)
    }

    /// Required fields in template column order.
    pub fn required_in_column_order(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.expected_headers
            .iter()
            .copied()
            .filter(|h| self.is_required(h))
    }
}

static MUSEOLOGICAL: Schema = Schema {
    kind: RecordKind::Museological,
    expected_headers: &[
        "nderegistro",
        "outrosnumeros",
        "situacao",
        "denominacao",
        "titulo",
        "autor",
        "classificacao",
        "resumodescritivo",
        "dimensoes",
        "altura",
        "largura",
        "profundidade",
        "diametro",
        "espessura",
        "uniddepesagem",
        "peso",
        "materialtecnica",
        "estadodeconservacao",
        "localdeproducao",
        "datadeproducao",
        "condicoesdereproducao",
        "midiasrelacionadas",
    ],
    required_fields: &[
        "nderegistro",
        "situacao",
        "denominacao",
        "autor",
        "resumodescritivo",
        "dimensoes",
        "materialtecnica",
        "estadodeconservacao",
        "condicoesdereproducao",
    ],
};

static BIBLIOGRAPHIC: Schema = Schema {
    kind: RecordKind::Bibliographic,
    expected_headers: &[
        "nderegistro",
        "outrosnumeros",
        "situacao",
        "titulo",
        "tipo",
        "identificacaoderesponsabilidade",
        "localdeproducao",
        "editora",
        "datadeproducao",
        "dimensaofisica",
        "materialtecnica",
        "encadernacao",
        "resumodescritivo",
        "estadodeconservacao",
        "assuntoprincipal",
        "assuntocronologico",
        "assuntogeografico",
        "condicoesdereproducao",
        "midiasrelacionadas",
    ],
    required_fields: &[
        "nderegistro",
        "situacao",
        "titulo",
        "tipo",
        "identificacaoderesponsabilidade",
        "localdeproducao",
        "editora",
        "datadeproducao",
        "dimensaofisica",
        "materialtecnica",
        "encadernacao",
        "resumodescritivo",
        "estadodeconservacao",
        "assuntoprincipal",
        "condicoesdereproducao",
    ],
};

static ARCHIVAL: Schema = Schema {
    kind: RecordKind::Archival,
    expected_headers: &[
        "coddereferencia",
        "titulo",
        "data",
        "niveldedescricao",
        "dimensaoesuporte",
        "nomedoprodutor",
        "historiaadministrativabiografia",
        "historiaarquivistica",
        "procedencia",
        "ambitoeconteudo",
        "sistemadearranjo",
        "condicoesdereproducao",
        "existenciaelocalizacaodosoriginais",
        "notassobreconservacao",
        "pontosdeacessoeindexacaodeassuntos",
        "midiasrelacionadas",
    ],
    required_fields: &[
        "coddereferencia",
        "titulo",
        "data",
        "niveldedescricao",
        "dimensaoesuporte",
        "nomedoprodutor",
    ],
};

/// Template for `kind`.
pub fn schema_for(kind: RecordKind) -> &'static Schema {
    match kind {
        RecordKind::Museological => &MUSEOLOGICAL,
        RecordKind::Bibliographic => &BIBLIOGRAPHIC,
        RecordKind::Archival => &ARCHIVAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_counts() {
        assert_eq!(schema_for(RecordKind::Museological).column_count(), 22);
        assert_eq!(schema_for(RecordKind::Bibliographic).column_count(), 19);
        assert_eq!(schema_for(RecordKind::Archival).column_count(), 16);
    }

    #[test]
    fn test_schema_kind_matches_lookup() {
        for kind in RecordKind::ALL {
            assert_eq!(schema_for(kind).kind, kind);
        }
    }

    #[test]
    fn test_position_and_required() {
        let schema = schema_for(RecordKind::Museological);
        assert_eq!(schema.position("nderegistro"), Some(0));
        assert_eq!(schema.position("midiasrelacionadas"), Some(21));
        assert_eq!(schema.position("codigo"), None);
        assert!(schema.is_required("situacao"));
        assert!(!schema.is_required("titulo"));
    }

    #[test]
    fn test_required_in_column_order() {
        let schema = schema_for(RecordKind::Archival);
        let required: Vec<_> = schema.required_in_column_order().collect();
        assert_eq!(required, schema.required_fields);
    }
}
