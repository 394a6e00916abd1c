//! Two-level navigation list (center -> offices) built from `area.json`.

use crate::types::AreaDocument;

/// One selectable office row in the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeRow {
    pub code: String,
    pub name: String,
}

/// A collapsible group of offices under one regional center
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterGroup {
    pub code: String,
    pub name: String,
    pub offices: Vec<OfficeRow>,
}

/// A child code listed by a center that has no entry in `offices`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOffice {
    pub center_code: String,
    pub office_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub centers: Vec<CenterGroup>,
    skipped: Vec<SkippedOffice>,
}

impl Catalog {
    /// Build the catalog. Centers come out in code order, offices in the
    /// order of each center's `children`; unknown child codes are skipped.
    pub fn from_document(doc: &AreaDocument) -> Self {
        let mut skipped = Vec::new();

        let centers = doc
            .centers
            .iter()
            .map(|(center_code, center)| {
                let offices = center
                    .children
                    .iter()
                    .filter_map(|office_code| match doc.offices.get(office_code) {
                        Some(office) => Some(OfficeRow {
                            code: office_code.clone(),
                            name: office.name.clone(),
                        }),
                        None => {
                            skipped.push(SkippedOffice {
                                center_code: center_code.clone(),
                                office_code: office_code.clone(),
                            });
                            None
                        }
                    })
                    .collect();

                CenterGroup {
                    code: center_code.clone(),
                    name: center.name.clone(),
                    offices,
                }
            })
            .collect();

        if !skipped.is_empty() {
            tracing::warn!(
                count = skipped.len(),
                codes = ?skipped.iter().map(|s| s.office_code.as_str()).collect::<Vec<_>>(),
                "Skipping center children with no office entry"
            );
        }

        Self { centers, skipped }
    }

    /// Child codes dropped while building the catalog
    pub fn skipped(&self) -> &[SkippedOffice] {
        &self.skipped
    }

    pub fn office_count(&self) -> usize {
        self.centers.iter().map(|c| c.offices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn find_office(&self, code: &str) -> Option<&OfficeRow> {
        self.centers
            .iter()
            .flat_map(|c| c.offices.iter())
            .find(|o| o.code == code)
    }
}
