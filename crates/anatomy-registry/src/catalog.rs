//! Standard human-body region catalog.
//!
//! A ready-made hierarchy of the major body regions: the trunk divisions
//! and both sides of the upper and lower limbs. Child lists and levels are
//! derived from the parent links, so the catalog is well-formed by
//! construction.

use std::collections::HashMap;

use anatomy_types::StructureCategory::{
    self, Bones, Joints, Ligaments, Muscles, Nerves, Organs, Vessels,
};
use anatomy_types::{CameraPosition, Laterality, Region, RegionStructures, StructureRef, Vec3};

use crate::store::RegionStore;
use crate::types::RegistryResult;

/// Id of the catalog root.
pub const BODY: &str = "body";

/// (id suffix, name, Latin name, FMA id, mesh id, camera height)
type TrunkRow = (&'static str, &'static str, &'static str, &'static str, &'static str, f32);

const TRUNK: &[TrunkRow] = &[
    ("head", "Head", "Caput", "FMA:7154", "head_complete", 1.7),
    ("head.cranium", "Cranium", "Cranium", "FMA:52792", "cranium", 1.75),
    ("head.face", "Face", "Facies", "FMA:53673", "face", 1.65),
    ("neck", "Neck", "Collum", "FMA:7155", "neck", 1.5),
    ("thorax", "Thorax", "Thorax", "FMA:9576", "thorax_complete", 1.3),
    ("thorax.wall", "Thoracic Wall", "Paries thoracis", "FMA:10428", "thoracic_wall", 1.3),
    ("thorax.cavity", "Thoracic Cavity", "Cavitas thoracis", "FMA:7565", "thoracic_cavity", 1.3),
    ("abdomen", "Abdomen", "Abdomen", "FMA:9577", "abdomen_complete", 1.05),
    ("abdomen.wall", "Abdominal Wall", "Paries abdominis", "FMA:10401", "abdominal_wall", 1.05),
    ("abdomen.cavity", "Abdominal Cavity", "Cavitas abdominis", "FMA:10708", "abdominal_cavity", 1.05),
    ("pelvis", "Pelvis", "Pelvis", "FMA:9578", "pelvis_complete", 0.9),
    ("pelvis.wall", "Pelvic Wall", "Paries pelvis", "FMA:10402", "pelvic_wall", 0.9),
    ("pelvis.cavity", "Pelvic Cavity", "Cavitas pelvis", "FMA:10709", "pelvic_cavity", 0.9),
    ("pelvis.perineum", "Perineum", "Perineum", "FMA:9579", "perineum", 0.85),
    ("back", "Back", "Dorsum", "FMA:25056", "back", 1.2),
];

const TRUNK_STRUCTURES: &[TrunkStructure] = &[
    ("head", Bones, "skull", "Skull", "FMA:9611"),
    ("head", Nerves, "cn-i", "Olfactory nerve (CN I)", "FMA:46787"),
    ("head", Nerves, "cn-ii", "Optic nerve (CN II)", "FMA:50863"),
    ("head", Vessels, "ica", "Internal carotid artery", "FMA:3947"),
    ("head", Vessels, "eca", "External carotid artery", "FMA:10635"),
    ("head.cranium", Bones, "frontal", "Frontal bone", "FMA:9703"),
    ("head.cranium", Bones, "parietal-l", "Left parietal bone", "FMA:9614"),
    ("head.cranium", Bones, "parietal-r", "Right parietal bone", "FMA:9614"),
    ("head.cranium", Bones, "temporal-l", "Left temporal bone", "FMA:9616"),
    ("head.cranium", Bones, "temporal-r", "Right temporal bone", "FMA:9616"),
    ("head.cranium", Bones, "occipital", "Occipital bone", "FMA:9617"),
    ("head.cranium", Bones, "sphenoid", "Sphenoid bone", "FMA:9618"),
    ("head.cranium", Bones, "ethmoid", "Ethmoid bone", "FMA:9622"),
    ("head.cranium", Organs, "brain", "Brain", "FMA:50801"),
    ("head.face", Bones, "maxilla", "Maxilla", "FMA:9711"),
    ("head.face", Bones, "mandible", "Mandible", "FMA:9612"),
    ("head.face", Bones, "nasal-l", "Left nasal bone", "FMA:9719"),
    ("head.face", Bones, "nasal-r", "Right nasal bone", "FMA:9719"),
    ("head.face", Bones, "zygomatic-l", "Left zygomatic bone", "FMA:9720"),
    ("head.face", Bones, "zygomatic-r", "Right zygomatic bone", "FMA:9720"),
    ("head.face", Muscles, "orbicularis-oculi", "Orbicularis oculi", "FMA:46779"),
    ("head.face", Muscles, "orbicularis-oris", "Orbicularis oris", "FMA:46845"),
    ("head.face", Muscles, "masseter", "Masseter", "FMA:45000"),
    ("head.face", Muscles, "temporalis", "Temporalis", "FMA:45001"),
    ("head.face", Nerves, "cn-v", "Trigeminal nerve (CN V)", "FMA:50866"),
    ("head.face", Nerves, "cn-vii", "Facial nerve (CN VII)", "FMA:50869"),
    ("neck", Bones, "c1-c7", "Cervical vertebrae (C1-C7)", "FMA:9915"),
    ("neck", Bones, "hyoid", "Hyoid bone", "FMA:9607"),
    ("neck", Muscles, "scm", "Sternocleidomastoid", "FMA:45005"),
    ("neck", Muscles, "trapezius", "Trapezius", "FMA:9626"),
    ("neck", Muscles, "scalenes", "Scalene muscles", "FMA:45002"),
    ("neck", Vessels, "cca", "Common carotid artery", "FMA:3940"),
    ("neck", Vessels, "ijv", "Internal jugular vein", "FMA:4721"),
    ("neck", Vessels, "ejv", "External jugular vein", "FMA:13110"),
    ("neck", Nerves, "vagus", "Vagus nerve (CN X)", "FMA:5731"),
    ("neck", Nerves, "cervical-plexus", "Cervical plexus", "FMA:5930"),
    ("neck", Organs, "thyroid", "Thyroid gland", "FMA:9603"),
    ("neck", Organs, "larynx", "Larynx", "FMA:55097"),
    ("neck", Organs, "pharynx", "Pharynx", "FMA:9608"),
    ("thorax.wall", Bones, "sternum", "Sternum", "FMA:9632"),
    ("thorax.wall", Bones, "ribs", "Ribs (1-12)", "FMA:7574"),
    ("thorax.wall", Bones, "t1-t12", "Thoracic vertebrae (T1-T12)", "FMA:9916"),
    ("thorax.wall", Muscles, "pectoralis-major", "Pectoralis major", "FMA:9627"),
    ("thorax.wall", Muscles, "pectoralis-minor", "Pectoralis minor", "FMA:9629"),
    ("thorax.wall", Muscles, "intercostals", "Intercostal muscles", "FMA:9622"),
    ("thorax.wall", Muscles, "diaphragm", "Diaphragm", "FMA:22356"),
    ("thorax.wall", Nerves, "intercostal-nerves", "Intercostal nerves", "FMA:65279"),
    ("thorax.cavity", Organs, "heart", "Heart", "FMA:7088"),
    ("thorax.cavity", Organs, "lung-l", "Left lung", "FMA:7310"),
    ("thorax.cavity", Organs, "lung-r", "Right lung", "FMA:7309"),
    ("thorax.cavity", Organs, "trachea", "Trachea", "FMA:7394"),
    ("thorax.cavity", Organs, "esophagus-thoracic", "Esophagus (thoracic part)", "FMA:7145"),
    ("thorax.cavity", Organs, "thymus", "Thymus", "FMA:9607"),
    ("thorax.cavity", Vessels, "aorta", "Aorta", "FMA:50040"),
    ("thorax.cavity", Vessels, "pulmonary-trunk", "Pulmonary trunk", "FMA:8612"),
    ("thorax.cavity", Vessels, "svc", "Superior vena cava", "FMA:4720"),
    ("thorax.cavity", Vessels, "ivc-thoracic", "Inferior vena cava (thoracic)", "FMA:10951"),
    ("thorax.cavity", Nerves, "phrenic", "Phrenic nerve", "FMA:6191"),
    ("thorax.cavity", Nerves, "vagus-thoracic", "Vagus nerve (thoracic)", "FMA:5731"),
    ("abdomen.wall", Bones, "l1-l5", "Lumbar vertebrae (L1-L5)", "FMA:9917"),
    ("abdomen.wall", Muscles, "rectus-abdominis", "Rectus abdominis", "FMA:9628"),
    ("abdomen.wall", Muscles, "external-oblique", "External oblique", "FMA:9632"),
    ("abdomen.wall", Muscles, "internal-oblique", "Internal oblique", "FMA:9633"),
    ("abdomen.wall", Muscles, "transversus-abdominis", "Transversus abdominis", "FMA:9634"),
    ("abdomen.cavity", Organs, "liver", "Liver", "FMA:7197"),
    ("abdomen.cavity", Organs, "stomach", "Stomach", "FMA:7148"),
    ("abdomen.cavity", Organs, "spleen", "Spleen", "FMA:7196"),
    ("abdomen.cavity", Organs, "pancreas", "Pancreas", "FMA:7198"),
    ("abdomen.cavity", Organs, "small-intestine", "Small intestine", "FMA:7200"),
    ("abdomen.cavity", Organs, "large-intestine", "Large intestine", "FMA:7201"),
    ("abdomen.cavity", Organs, "kidney-l", "Left kidney", "FMA:7203"),
    ("abdomen.cavity", Organs, "kidney-r", "Right kidney", "FMA:7203"),
    ("abdomen.cavity", Organs, "adrenal-l", "Left adrenal gland", "FMA:9604"),
    ("abdomen.cavity", Organs, "adrenal-r", "Right adrenal gland", "FMA:9604"),
    ("abdomen.cavity", Vessels, "abdominal-aorta", "Abdominal aorta", "FMA:3781"),
    ("abdomen.cavity", Vessels, "ivc", "Inferior vena cava", "FMA:10951"),
    ("abdomen.cavity", Vessels, "celiac-trunk", "Celiac trunk", "FMA:14786"),
    ("abdomen.cavity", Vessels, "sma", "Superior mesenteric artery", "FMA:14787"),
    ("abdomen.cavity", Vessels, "ima", "Inferior mesenteric artery", "FMA:14788"),
    ("abdomen.cavity", Vessels, "portal-vein", "Portal vein", "FMA:50735"),
    ("pelvis.wall", Bones, "sacrum", "Sacrum", "FMA:9696"),
    ("pelvis.wall", Bones, "coccyx", "Coccyx", "FMA:9697"),
    ("pelvis.wall", Bones, "hip-bone-l", "Left hip bone", "FMA:9598"),
    ("pelvis.wall", Bones, "hip-bone-r", "Right hip bone", "FMA:9598"),
    ("pelvis.wall", Muscles, "piriformis", "Piriformis", "FMA:9620"),
    ("pelvis.wall", Muscles, "obturator-internus", "Obturator internus", "FMA:9621"),
    ("pelvis.wall", Muscles, "levator-ani", "Levator ani", "FMA:9623"),
    ("pelvis.cavity", Organs, "bladder", "Urinary bladder", "FMA:15900"),
    ("pelvis.cavity", Organs, "rectum", "Rectum", "FMA:7207"),
    ("pelvis.cavity", Organs, "uterus", "Uterus", "FMA:17558"),
    ("pelvis.cavity", Organs, "ovary-l", "Left ovary", "FMA:7209"),
    ("pelvis.cavity", Organs, "ovary-r", "Right ovary", "FMA:7209"),
    ("pelvis.cavity", Organs, "prostate", "Prostate", "FMA:9600"),
    ("pelvis.cavity", Vessels, "internal-iliac-l", "Left internal iliac artery", "FMA:18805"),
    ("pelvis.cavity", Vessels, "internal-iliac-r", "Right internal iliac artery", "FMA:18805"),
    ("back", Bones, "vertebral-column", "Vertebral column", "FMA:23866"),
    ("back", Bones, "scapula-l", "Left scapula", "FMA:9631"),
    ("back", Bones, "scapula-r", "Right scapula", "FMA:9631"),
    ("back", Muscles, "trapezius", "Trapezius", "FMA:9626"),
    ("back", Muscles, "latissimus-dorsi", "Latissimus dorsi", "FMA:9625"),
    ("back", Muscles, "erector-spinae", "Erector spinae", "FMA:9640"),
    ("back", Muscles, "rhomboid-major", "Rhomboid major", "FMA:9630"),
    ("back", Muscles, "rhomboid-minor", "Rhomboid minor", "FMA:9631"),
    ("back", Nerves, "spinal-cord", "Spinal cord", "FMA:7647"),
    ("back", Nerves, "spinal-nerves", "Spinal nerves", "FMA:5858"),
];

/// (category, id stem, name without side, (left, right) FMA ids)
type SegmentStructure = (
    StructureCategory,
    &'static str,
    &'static str,
    (&'static str, &'static str),
);

/// (region id suffix, category, structure id, name, FMA id)
type TrunkStructure = (&'static str, StructureCategory, &'static str, &'static str, &'static str);

/// One limb segment: key, name, (left, right) Latin names, (left, right)
/// FMA ids, camera height and per-side structures.
struct Segment {
    key: &'static str,
    name: &'static str,
    latin: (&'static str, &'static str),
    fma: (&'static str, &'static str),
    height: f32,
    structures: &'static [SegmentStructure],
}

/// A bilateral limb and its per-side data.
struct Limb {
    key: &'static str,
    name: &'static str,
    latin: &'static str,
    fma: &'static str,
    side_latin: (&'static str, &'static str),
    side_fma: (&'static str, &'static str),
    height: f32,
    segments: &'static [Segment],
}

const UPPER_LIMB: Limb = Limb {
    key: "upper-limb",
    name: "Upper Limb",
    latin: "Membrum superius",
    fma: "FMA:7183",
    side_latin: ("Membrum superius sinistrum", "Membrum superius dextrum"),
    side_fma: ("FMA:24897", "FMA:24896"),
    height: 1.2,
    segments: &[
        Segment {
            key: "shoulder",
            name: "Shoulder",
            latin: ("Articulatio humeri sinistra", "Articulatio humeri dextra"),
            fma: ("FMA:25912", "FMA:25911"),
            height: 1.45,
            structures: &[
                (Bones, "clavicle", "clavicle", ("FMA:9629", "FMA:9629")),
                (Bones, "scapula", "scapula", ("FMA:9631", "FMA:9631")),
                (Bones, "humerus-prox", "proximal humerus", ("FMA:23130", "FMA:23129")),
                (Muscles, "deltoid", "deltoid", ("FMA:9626", "FMA:9626")),
                (Muscles, "supraspinatus", "supraspinatus", ("FMA:9627", "FMA:9627")),
                (Muscles, "infraspinatus", "infraspinatus", ("FMA:9628", "FMA:9628")),
                (Muscles, "subscapularis", "subscapularis", ("FMA:9629", "FMA:9629")),
                (Muscles, "teres-minor", "teres minor", ("FMA:9630", "FMA:9630")),
                (Joints, "glenohumeral", "glenohumeral joint", ("FMA:25912", "FMA:25911")),
                (Joints, "acromioclavicular", "acromioclavicular joint", ("FMA:25913", "FMA:25914")),
            ],
        },
        Segment {
            key: "arm",
            name: "Arm",
            latin: ("Brachium sinistrum", "Brachium dextrum"),
            fma: ("FMA:24898", "FMA:24891"),
            height: 1.3,
            structures: &[
                (Bones, "humerus", "humerus", ("FMA:9623", "FMA:9623")),
                (Muscles, "biceps", "biceps brachii", ("FMA:9626", "FMA:9626")),
                (Muscles, "triceps", "triceps brachii", ("FMA:9627", "FMA:9627")),
                (Muscles, "brachialis", "brachialis", ("FMA:9628", "FMA:9628")),
                (Vessels, "brachial-a", "brachial artery", ("FMA:22689", "FMA:22689")),
                (Vessels, "basilic-v", "basilic vein", ("FMA:22690", "FMA:22690")),
                (Vessels, "cephalic-v", "cephalic vein", ("FMA:22691", "FMA:22691")),
                (Nerves, "musculocutaneous", "musculocutaneous nerve", ("FMA:37072", "FMA:37072")),
                (Nerves, "radial-arm", "radial nerve (arm)", ("FMA:37073", "FMA:37073")),
                (Nerves, "median-arm", "median nerve (arm)", ("FMA:37074", "FMA:37074")),
                (Nerves, "ulnar-arm", "ulnar nerve (arm)", ("FMA:37075", "FMA:37075")),
            ],
        },
        Segment {
            key: "forearm",
            name: "Forearm",
            latin: ("Antebrachium sinistrum", "Antebrachium dextrum"),
            fma: ("FMA:24899", "FMA:24892"),
            height: 1.05,
            structures: &[
                (Bones, "radius", "radius", ("FMA:9624", "FMA:9624")),
                (Bones, "ulna", "ulna", ("FMA:9625", "FMA:9625")),
                (Muscles, "pronator-teres", "pronator teres", ("FMA:9629", "FMA:9629")),
                (Muscles, "fcr", "flexor carpi radialis", ("FMA:9630", "FMA:9630")),
                (Muscles, "fcu", "flexor carpi ulnaris", ("FMA:9631", "FMA:9631")),
                (Muscles, "ecrl", "extensor carpi radialis longus", ("FMA:9632", "FMA:9632")),
                (Muscles, "ecu", "extensor carpi ulnaris", ("FMA:9633", "FMA:9633")),
                (Vessels, "radial-a", "radial artery", ("FMA:22730", "FMA:22730")),
                (Vessels, "ulnar-a", "ulnar artery", ("FMA:22731", "FMA:22731")),
                (Nerves, "median-forearm", "median nerve (forearm)", ("FMA:37076", "FMA:37076")),
                (Nerves, "ulnar-forearm", "ulnar nerve (forearm)", ("FMA:37077", "FMA:37077")),
                (Nerves, "radial-forearm", "radial nerve (forearm)", ("FMA:37078", "FMA:37078")),
                (Joints, "elbow", "elbow joint", ("FMA:35291", "FMA:35291")),
                (Joints, "prox-radioulnar", "proximal radioulnar joint", ("FMA:35292", "FMA:35292")),
                (Joints, "dist-radioulnar", "distal radioulnar joint", ("FMA:35293", "FMA:35293")),
            ],
        },
        Segment {
            key: "wrist",
            name: "Wrist",
            latin: ("Carpus sinister", "Carpus dexter"),
            fma: ("FMA:24920", "FMA:24915"),
            height: 0.9,
            structures: &[
                (Bones, "scaphoid", "scaphoid", ("FMA:9640", "FMA:9640")),
                (Bones, "lunate", "lunate", ("FMA:9641", "FMA:9641")),
                (Bones, "triquetrum", "triquetrum", ("FMA:9642", "FMA:9642")),
                (Bones, "pisiform", "pisiform", ("FMA:9643", "FMA:9643")),
                (Bones, "trapezium", "trapezium", ("FMA:9644", "FMA:9644")),
                (Bones, "trapezoid", "trapezoid", ("FMA:9645", "FMA:9645")),
                (Bones, "capitate", "capitate", ("FMA:9646", "FMA:9646")),
                (Bones, "hamate", "hamate", ("FMA:9647", "FMA:9647")),
                (Joints, "radiocarpal", "radiocarpal joint", ("FMA:35294", "FMA:35294")),
                (Joints, "midcarpal", "midcarpal joint", ("FMA:35295", "FMA:35295")),
            ],
        },
        Segment {
            key: "hand",
            name: "Hand",
            latin: ("Manus sinistra", "Manus dextra"),
            fma: ("FMA:24919", "FMA:24914"),
            height: 0.8,
            structures: &[
                (Bones, "metacarpals", "metacarpals (I-V)", ("FMA:9651", "FMA:9651")),
                (Bones, "phalanges-hand", "phalanges of hand", ("FMA:9652", "FMA:9652")),
                (Muscles, "thenar", "thenar muscles", ("FMA:9660", "FMA:9660")),
                (Muscles, "hypothenar", "hypothenar muscles", ("FMA:9661", "FMA:9661")),
                (Muscles, "lumbricals-hand", "lumbricals of hand", ("FMA:9662", "FMA:9662")),
                (Muscles, "interossei-hand", "interossei of hand", ("FMA:9663", "FMA:9663")),
                (Nerves, "median-hand", "median nerve (hand)", ("FMA:37079", "FMA:37079")),
                (Nerves, "ulnar-hand", "ulnar nerve (hand)", ("FMA:37080", "FMA:37080")),
            ],
        },
    ],
};

const LOWER_LIMB: Limb = Limb {
    key: "lower-limb",
    name: "Lower Limb",
    latin: "Membrum inferius",
    fma: "FMA:7184",
    side_latin: ("Membrum inferius sinistrum", "Membrum inferius dextrum"),
    side_fma: ("FMA:24979", "FMA:24978"),
    height: 0.5,
    segments: &[
        Segment {
            key: "hip",
            name: "Hip",
            latin: ("Coxa sinistra", "Coxa dextra"),
            fma: ("FMA:24981", "FMA:24980"),
            height: 0.9,
            structures: &[
                (Bones, "hip-bone", "hip bone", ("FMA:9598", "FMA:9598")),
                (Bones, "femur-prox", "proximal femur", ("FMA:24476", "FMA:24475")),
                (Muscles, "gluteus-max", "gluteus maximus", ("FMA:9622", "FMA:9622")),
                (Muscles, "gluteus-med", "gluteus medius", ("FMA:9623", "FMA:9623")),
                (Muscles, "gluteus-min", "gluteus minimus", ("FMA:9624", "FMA:9624")),
                (Muscles, "iliopsoas", "iliopsoas", ("FMA:9625", "FMA:9625")),
                (Joints, "hip-joint", "hip joint", ("FMA:35178", "FMA:35177")),
            ],
        },
        Segment {
            key: "thigh",
            name: "Thigh",
            latin: ("Femur sinistrum", "Femur dextrum"),
            fma: ("FMA:24982", "FMA:24970"),
            height: 0.65,
            structures: &[
                (Bones, "femur", "femur", ("FMA:24474", "FMA:24474")),
                (Muscles, "quadriceps", "quadriceps femoris", ("FMA:9626", "FMA:9626")),
                (Muscles, "hamstrings", "hamstrings", ("FMA:9627", "FMA:9627")),
                (Muscles, "adductors", "adductor muscles", ("FMA:9628", "FMA:9628")),
                (Muscles, "sartorius", "sartorius", ("FMA:9629", "FMA:9629")),
                (Vessels, "femoral-a", "femoral artery", ("FMA:70248", "FMA:70248")),
                (Vessels, "femoral-v", "femoral vein", ("FMA:70249", "FMA:70249")),
                (Vessels, "great-saphenous", "great saphenous vein", ("FMA:70250", "FMA:70250")),
                (Nerves, "femoral-n", "femoral nerve", ("FMA:16570", "FMA:16570")),
                (Nerves, "sciatic", "sciatic nerve", ("FMA:19034", "FMA:19034")),
            ],
        },
        Segment {
            key: "knee",
            name: "Knee",
            latin: ("Genu sinistrum", "Genu dextrum"),
            fma: ("FMA:24983", "FMA:24971"),
            height: 0.45,
            structures: &[
                (Bones, "patella", "patella", ("FMA:9675", "FMA:9675")),
                (Bones, "femur-dist", "distal femur", ("FMA:24477", "FMA:24477")),
                (Bones, "tibia-prox", "proximal tibia", ("FMA:24479", "FMA:24479")),
                (Ligaments, "acl", "anterior cruciate ligament", ("FMA:44615", "FMA:44615")),
                (Ligaments, "pcl", "posterior cruciate ligament", ("FMA:44616", "FMA:44616")),
                (Ligaments, "mcl", "medial collateral ligament", ("FMA:44617", "FMA:44617")),
                (Ligaments, "lcl", "lateral collateral ligament", ("FMA:44618", "FMA:44618")),
                (Joints, "knee-joint", "knee joint", ("FMA:35350", "FMA:35349")),
            ],
        },
        Segment {
            key: "leg",
            name: "Leg",
            latin: ("Crus sinistrum", "Crus dextrum"),
            fma: ("FMA:24984", "FMA:24972"),
            height: 0.25,
            structures: &[
                (Bones, "tibia", "tibia", ("FMA:9676", "FMA:9676")),
                (Bones, "fibula", "fibula", ("FMA:9677", "FMA:9677")),
                (Muscles, "gastrocnemius", "gastrocnemius", ("FMA:9630", "FMA:9630")),
                (Muscles, "soleus", "soleus", ("FMA:9631", "FMA:9631")),
                (Muscles, "tibialis-ant", "tibialis anterior", ("FMA:9632", "FMA:9632")),
                (Muscles, "peroneus", "peroneus muscles", ("FMA:9633", "FMA:9633")),
                (Vessels, "popliteal-a", "popliteal artery", ("FMA:70251", "FMA:70251")),
                (Vessels, "ant-tibial-a", "anterior tibial artery", ("FMA:70252", "FMA:70252")),
                (Vessels, "post-tibial-a", "posterior tibial artery", ("FMA:70253", "FMA:70253")),
                (Nerves, "tibial-n", "tibial nerve", ("FMA:19035", "FMA:19035")),
                (Nerves, "common-peroneal", "common peroneal nerve", ("FMA:19036", "FMA:19036")),
            ],
        },
        Segment {
            key: "ankle",
            name: "Ankle",
            latin: ("Tarsus sinister", "Tarsus dexter"),
            fma: ("FMA:24985", "FMA:24973"),
            height: 0.08,
            structures: &[
                (Bones, "talus", "talus", ("FMA:9680", "FMA:9680")),
                (Bones, "calcaneus", "calcaneus", ("FMA:9681", "FMA:9681")),
                (Ligaments, "atfl", "anterior talofibular ligament", ("FMA:44620", "FMA:44620")),
                (Ligaments, "cfl", "calcaneofibular ligament", ("FMA:44621", "FMA:44621")),
                (Ligaments, "deltoid-lig", "deltoid ligament", ("FMA:44622", "FMA:44622")),
                (Joints, "ankle-joint", "ankle joint", ("FMA:35360", "FMA:35359")),
                (Joints, "subtalar", "subtalar joint", ("FMA:35361", "FMA:35361")),
            ],
        },
        Segment {
            key: "foot",
            name: "Foot",
            latin: ("Pes sinister", "Pes dexter"),
            fma: ("FMA:24986", "FMA:24974"),
            height: 0.03,
            structures: &[
                (Bones, "tarsals", "tarsal bones", ("FMA:9682", "FMA:9682")),
                (Bones, "metatarsals", "metatarsals (I-V)", ("FMA:9683", "FMA:9683")),
                (Bones, "phalanges-foot", "phalanges of foot", ("FMA:9684", "FMA:9684")),
                (Muscles, "intrinsic-foot", "intrinsic foot muscles", ("FMA:9670", "FMA:9670")),
            ],
        },
    ],
};

/// Builds a store holding the standard body catalog.
pub fn standard_body() -> RegistryResult<RegionStore> {
    RegionStore::from_regions(standard_regions())
}

/// The standard body catalog as a region list, root first.
pub fn standard_regions() -> Vec<Region> {
    let mut regions = vec![Region::new(BODY, "Human Body")
        .with_latin_name("Corpus humanum")
        .with_ontology_id("FMA:20394")
        .with_mesh_id("body_complete")
        .with_camera(CameraPosition::ANTERIOR)
        .with_description("The complete human body")];

    for &(suffix, name, latin, fma, mesh, height) in TRUNK {
        regions.push(
            Region::new(format!("{BODY}.{suffix}"), name)
                .with_latin_name(latin)
                .with_ontology_id(fma)
                .with_structures(trunk_structures(suffix))
                .with_mesh_id(mesh)
                .with_camera(focus(0.0, height, 2.0)),
        );
    }

    for limb in [&UPPER_LIMB, &LOWER_LIMB] {
        push_limb(&mut regions, limb);
    }

    link_hierarchy(&mut regions);
    regions
}

fn push_limb(regions: &mut Vec<Region>, limb: &Limb) {
    let limb_id = format!("{BODY}.{}", limb.key);
    let mesh_stem = limb.key.replace('-', "_");

    regions.push(
        Region::new(limb_id.clone(), limb.name)
            .with_latin_name(limb.latin)
            .with_ontology_id(limb.fma)
            .with_laterality(Laterality::Bilateral)
            .with_mesh_id(format!("{mesh_stem}_bilateral"))
            .with_camera(focus(0.0, limb.height, 1.2)),
    );

    for side in [Laterality::Left, Laterality::Right] {
        let other = side.opposite().unwrap_or(side);
        let side_id = format!("{limb_id}.{side}");
        let x = side_offset(side);

        regions.push(
            Region::new(side_id.clone(), format!("{} {}", title(side), limb.name))
                .with_latin_name(pick(limb.side_latin, side))
                .with_ontology_id(pick(limb.side_fma, side))
                .with_laterality(side)
                .with_contralateral(format!("{limb_id}.{other}"))
                .with_mesh_id(format!("{mesh_stem}_{side}"))
                .with_camera(focus(x * 0.3, limb.height, 1.5)),
        );

        for segment in limb.segments {
            regions.push(
                Region::new(
                    format!("{side_id}.{}", segment.key),
                    format!("{} {}", title(side), segment.name),
                )
                .with_latin_name(pick(segment.latin, side))
                .with_ontology_id(pick(segment.fma, side))
                .with_laterality(side)
                .with_contralateral(format!("{limb_id}.{other}.{}", segment.key))
                .with_structures(segment_structures(segment, side))
                .with_mesh_id(format!("{}_{side}", segment.key))
                .with_camera(focus(x * 0.4, segment.height, 2.5)),
            );
        }
    }
}

fn trunk_structures(suffix: &str) -> RegionStructures {
    let mut structures = RegionStructures::new();
    for &(_, category, id, name, fma) in TRUNK_STRUCTURES.iter().filter(|row| row.0 == suffix) {
        structures.push(category, StructureRef::new(id, name).with_ontology_id(fma));
    }
    structures
}

fn segment_structures(segment: &Segment, side: Laterality) -> RegionStructures {
    let suffix = &side.as_str()[..1];
    let mut structures = RegionStructures::new();
    for &(category, stem, name, fma) in segment.structures {
        structures.push(
            category,
            StructureRef::new(format!("{stem}-{suffix}"), format!("{} {name}", title(side)))
                .with_ontology_id(pick(fma, side))
                .with_laterality(side),
        );
    }
    structures
}

/// Fills `child_ids` and `level` from the parent implied by each id.
///
/// Regions must be listed parents first; children keep list order.
fn link_hierarchy(regions: &mut [Region]) {
    let mut position: HashMap<String, usize> = HashMap::new();
    for i in 0..regions.len() {
        let parent = regions[i]
            .id
            .rsplit_once(anatomy_types::ID_SEPARATOR)
            .and_then(|(parent, _)| position.get(parent).copied());

        if let Some(p) = parent {
            let child_id = regions[i].id.clone();
            let level = regions[p].level + 1;
            regions[p].child_ids.push(child_id);
            let parent_id = regions[p].id.clone();
            regions[i].parent_id = Some(parent_id);
            regions[i].level = level;
        }
        position.insert(regions[i].id.clone(), i);
    }
}

fn focus(x: f32, y: f32, zoom: f32) -> CameraPosition {
    CameraPosition::new(Vec3::new(x, y, 1.0), Vec3::new(x, y, 0.0), zoom)
}

fn side_offset(side: Laterality) -> f32 {
    match side {
        Laterality::Left => -1.0,
        _ => 1.0,
    }
}

fn title(side: Laterality) -> &'static str {
    match side {
        Laterality::Left => "Left",
        Laterality::Right => "Right",
        Laterality::Bilateral => "Bilateral",
        Laterality::Midline => "Midline",
    }
}

fn pick(pair: (&'static str, &'static str), side: Laterality) -> &'static str {
    match side {
        Laterality::Left => pair.0,
        _ => pair.1,
    }
}
