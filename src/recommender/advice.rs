use crate::models::HealthCondition;

/// Advisory strings for one condition. Conditions without a curated entry
/// get an empty slice, never an error.
pub fn advice_for(condition: &HealthCondition) -> &'static [&'static str] {
    match condition {
        HealthCondition::Diabetes => &[
            "Konsumsi makanan rendah gula dan tinggi serat",
            "Pilih karbohidrat kompleks seperti nasi merah",
            "Batasi makanan dengan indeks glikemik tinggi",
        ],
        HealthCondition::Hypertension => &[
            "Batasi konsumsi garam dan makanan tinggi lemak",
            "Konsumsi makanan kaya kalium seperti pisang",
            "Pilih makanan rendah sodium",
        ],
        HealthCondition::Obesity => &[
            "Pilih makanan rendah kalori dan tinggi serat",
            "Konsumsi protein lean untuk kenyang lebih lama",
            "Batasi makanan berlemak tinggi",
        ],
        HealthCondition::HeartHealth => &[
            "Pilih makanan rendah lemak jenuh",
            "Konsumsi makanan kaya omega-3",
            "Batasi makanan tinggi kolesterol",
        ],
        _ => &[],
    }
}

/// Fixed advice lookup over the active conditions, in request order.
pub fn collect_advice(conditions: &[HealthCondition]) -> Vec<String> {
    conditions
        .iter()
        .flat_map(|c| advice_for(c).iter().map(|s| s.to_string()))
        .collect()
}
