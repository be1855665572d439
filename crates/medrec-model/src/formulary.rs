//! Drugs a doctor may prescribe, grouped by speciality.

use crate::enums::Speciality;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formulary {
    pub category: &'static str,
    pub drugs: &'static [&'static str],
}

const CARDIOLOGY: Formulary = Formulary {
    category: "Cardiovascular",
    drugs: &[
        "Aspirin",
        "Atorvastatin",
        "Metoprolol",
        "Lisinopril",
        "Amlodipine",
        "Warfarin",
        "Clopidogrel",
        "Digoxin",
        "Furosemide",
        "Spironolactone",
        "Carvedilol",
        "Valsartan",
        "Nitroglycerin",
        "Hydralazine",
        "Amiodarone",
    ],
};

const NEUROLOGY: Formulary = Formulary {
    category: "Neurological",
    drugs: &[
        "Levetiracetam",
        "Gabapentin",
        "Pregabalin",
        "Carbamazepine",
        "Phenytoin",
        "Valproate",
        "Topiramate",
        "Lamotrigine",
        "Sumatriptan",
        "Rizatriptan",
        "Memantine",
        "Donepezil",
        "Ropinirole",
        "Pramipexole",
        "Baclofen",
    ],
};

const ORTHOPEDICS: Formulary = Formulary {
    category: "Musculoskeletal",
    drugs: &[
        "Ibuprofen",
        "Naproxen",
        "Celecoxib",
        "Meloxicam",
        "Diclofenac",
        "Tramadol",
        "Acetaminophen",
        "Cyclobenzaprine",
        "Methocarbamol",
        "Tizanidine",
        "Alendronate",
        "Risedronate",
        "Calcium Carbonate",
        "Vitamin D3",
        "Colchicine",
    ],
};

const PEDIATRICS: Formulary = Formulary {
    category: "Pediatric",
    drugs: &[
        "Amoxicillin",
        "Azithromycin",
        "Cetirizine",
        "Loratadine",
        "Albuterol",
        "Fluticasone",
        "Montelukast",
        "Ondansetron",
        "Ranitidine",
        "Omeprazole",
        "Diphenhydramine",
        "Guaifenesin",
        "Dextromethorphan",
        "Ibuprofen Pediatric",
        "Acetaminophen Pediatric",
    ],
};

const GENERAL: Formulary = Formulary {
    category: "General Medicine",
    drugs: &[
        "Metformin",
        "Lisinopril",
        "Omeprazole",
        "Losartan",
        "Levothyroxine",
        "Simvastatin",
        "Prednisone",
        "Pantoprazole",
        "Ciprofloxacin",
        "Metronidazole",
        "Doxycycline",
        "Fluconazole",
        "Clindamycin",
        "Sulfamethoxazole",
        "Levofloxacin",
    ],
};

impl Speciality {
    pub fn formulary(&self) -> Formulary {
        match self {
            Speciality::Cardiology => CARDIOLOGY,
            Speciality::Neurology => NEUROLOGY,
            Speciality::Orthopedics => ORTHOPEDICS,
            Speciality::Pediatrics => PEDIATRICS,
            Speciality::General => GENERAL,
        }
    }
}

/// Formulary for a free-text speciality; unknown names get the general list.
pub fn formulary_for(speciality: &str) -> Formulary {
    speciality
        .parse::<Speciality>()
        .map(|speciality| speciality.formulary())
        .unwrap_or(GENERAL)
}
