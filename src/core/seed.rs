use crate::core::VocabEntry;

/// Starter deck loaded on first run. German to English, shopping themed.
pub fn default_vocabulary() -> Vec<VocabEntry> {
    [
        ("funktionieren", "to work"),
        ("füllen", "to fill"),
        ("gekühlt", "refrigerated"),
        ("großer Laden", "store"),
        ("im Wert von", "worth of"),
        ("Kasse", "checkout"),
        ("kaufen", "to buy"),
        ("können", "may"),
        ("Kunde", "customer"),
        ("Kundenservice", "customer service"),
        ("reduzieren", "to reduce"),
        ("Regal", "shelf"),
        ("spenden", "to donate"),
        ("stattfinden", "to take place"),
        ("Tasche", "bag"),
        ("verkaufen", "to sell"),
        ("Verkäufer", "shop assistant"),
        ("Zulieferer", "supplier"),
        ("Kühllager", "refrigerated warehouse"),
        ("Laden", "shop"),
    ]
    .into_iter()
    .map(|(word, translation)| VocabEntry::new(word, translation))
    .collect()
}
