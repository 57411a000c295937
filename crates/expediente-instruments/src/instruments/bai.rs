use std::sync::LazyLock;

use crate::scoring::{Item, ScoreRange};
use crate::Instrument;

/// Escala de Ansiedad (inventario BAI abreviado): 5 ítems calificados 0–4.
pub struct Bai;

impl Instrument for Bai {
    fn id(&self) -> &str {
        "bai"
    }

    fn acronym(&self) -> &str {
        "BAI"
    }

    fn name(&self) -> &str {
        "Escala de Ansiedad"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            [
                ("nerviosismo", "1. Nerviosismo"),
                ("preocupacion", "2. Preocupación"),
                ("tension", "3. Tensión"),
                ("miedo_perder_control", "4. Miedo a perder el control"),
                ("inquietud", "5. Inquietud"),
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
