use std::sync::LazyLock;

use crate::scoring::{Item, ScoreRange};
use crate::Instrument;

/// Escala de Depresión (inventario BDI abreviado): 7 ítems calificados 0–4.
/// Totales orientativos, no diagnósticos.
pub struct Bdi;

impl Instrument for Bdi {
    fn id(&self) -> &str {
        "bdi"
    }

    fn acronym(&self) -> &str {
        "BDI"
    }

    fn name(&self) -> &str {
        "Escala de Depresión"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            [
                ("tristeza", "1. Tristeza"),
                ("pesimismo", "2. Pesimismo"),
                ("fracaso", "3. Fracaso"),
                ("perdida_placer", "4. Pérdida de Placer"),
                ("culpa", "5. Culpa"),
                ("castigo", "6. Castigo"),
                ("disconformidad", "7. Disconformidad"),
            ]
            .iter()
            .map(|(id, label)| Item {
                id: (*id).to_string(),
                label: (*label).to_string(),
                range: ScoreRange::LIKERT,
            })
            .collect()
        });
        &ITEMS
    }
}
