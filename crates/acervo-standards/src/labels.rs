//! Display labels for template columns.
//!
//! The labels are the header cells of the distributed spreadsheet models, so
//! `slugify(label)` yields the column slug. Validation never looks at them.

use acervo_model::{RecordKind, Slug};

const MUSEOLOGICAL_LABELS: &[(&str, &str)] = &[
    ("nderegistro", "Nº de Registro"),
    ("outrosnumeros", "Outros Números"),
    ("situacao", "Situação"),
    ("denominacao", "Denominação"),
    ("titulo", "Título"),
    ("autor", "Autor"),
    ("classificacao", "Classificação"),
    ("resumodescritivo", "Resumo Descritivo"),
    ("dimensoes", "Dimensões"),
    ("altura", "Altura"),
    ("largura", "Largura"),
    ("profundidade", "Profundidade"),
    ("diametro", "Diâmetro"),
    ("espessura", "Espessura"),
    ("uniddepesagem", "Unid. de Pesagem"),
    ("peso", "Peso"),
    ("materialtecnica", "Material/Técnica"),
    ("estadodeconservacao", "Estado de Conservação"),
    ("localdeproducao", "Local de Produção"),
    ("datadeproducao", "Data de Produção"),
    ("condicoesdereproducao", "Condições de Reprodução"),
    ("midiasrelacionadas", "Mídias Relacionadas"),
];

const BIBLIOGRAPHIC_LABELS: &[(&str, &str)] = &[
    ("nderegistro", "Nº de Registro"),
    ("outrosnumeros", "Outros Números"),
    ("situacao", "Situação"),
    ("titulo", "Título"),
    ("tipo", "Tipo"),
    ("identificacaoderesponsabilidade", "Identificação de Responsabilidade"),
    ("localdeproducao", "Local de Produção"),
    ("editora", "Editora"),
    ("datadeproducao", "Data de Produção"),
    ("dimensaofisica", "Dimensão Física"),
    ("materialtecnica", "Material/Técnica"),
    ("encadernacao", "Encadernação"),
    ("resumodescritivo", "Resumo Descritivo"),
    ("estadodeconservacao", "Estado de Conservação"),
    ("assuntoprincipal", "Assunto Principal"),
    ("assuntocronologico", "Assunto Cronológico"),
    ("assuntogeografico", "Assunto Geográfico"),
    ("condicoesdereproducao", "Condições de Reprodução"),
    ("midiasrelacionadas", "Mídias Relacionadas"),
];

const ARCHIVAL_LABELS: &[(&str, &str)] = &[
    ("coddereferencia", "Cód. de Referência"),
    ("titulo", "Título"),
    ("data", "Data"),
    ("niveldedescricao", "Nível de Descrição"),
    ("dimensaoesuporte", "Dimensão e Suporte"),
    ("nomedoprodutor", "Nome do Produtor"),
    ("historiaadministrativabiografia", "História Administrativa/Biografia"),
    ("historiaarquivistica", "História Arquivística"),
    ("procedencia", "Procedência"),
    ("ambitoeconteudo", "Âmbito e Conteúdo"),
    ("sistemadearranjo", "Sistema de Arranjo"),
    ("condicoesdereproducao", "Condições de Reprodução"),
    ("existenciaelocalizacaodosoriginais", "Existência e Localização dos Originais"),
    ("notassobreconservacao", "Notas sobre Conservação"),
    ("pontosdeacessoeindexacaodeassuntos", "Pontos de Acesso e Indexação de Assuntos"),
    ("midiasrelacionadas", "Mídias Relacionadas"),
];

fn labels(kind: RecordKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        RecordKind::Museological => MUSEOLOGICAL_LABELS,
        RecordKind::Bibliographic => BIBLIOGRAPHIC_LABELS,
        RecordKind::Archival => ARCHIVAL_LABELS,
    }
}

/// Human label for a column of `kind`.
pub fn field_label(kind: RecordKind, slug: &str) -> Option<&'static str> {
    labels(kind)
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, label)| *label)
}

/// Labels for a list of error slugs, falling back to the slug itself.
pub fn labelled_errors(kind: RecordKind, errors: &[Slug]) -> Vec<String> {
    errors
        .iter()
        .map(|slug| {
            field_label(kind, slug.as_str())
                .map_or_else(|| slug.to_string(), str::to_string)
        })
        .collect()
}

/// Header row of the blank template, in column order.
pub fn template_headers(kind: RecordKind) -> Vec<&'static str> {
    labels(kind).iter().map(|(_, label)| *label).collect()
}
