//! Display records for every section of the page.
//!
//! Everything here is a compile-time constant; nothing is added, removed or
//! edited after load.

/// Glyphs standing in for the icon set used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Award,
    BadgeCheck,
    BookOpen,
    Briefcase,
    Building,
    ClipboardList,
    CreditCard,
    FileText,
    Footprints,
    Globe,
    GraduationCap,
    HeartOff,
    Landmark,
    ListChecks,
    MapPinOff,
    Megaphone,
    School,
    ShieldAlert,
    TrendingDown,
    TrendingUp,
    Users,
    Wallet,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Phone,
    Mail,
    MapPin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Award => "🏅",
            Icon::BadgeCheck => "✅",
            Icon::BookOpen => "📖",
            Icon::Briefcase => "💼",
            Icon::Building => "🏢",
            Icon::ClipboardList => "📋",
            Icon::CreditCard => "💳",
            Icon::FileText => "📄",
            Icon::Footprints => "👣",
            Icon::Globe => "🌐",
            Icon::GraduationCap => "🎓",
            Icon::HeartOff => "💔",
            Icon::Landmark => "🏛️",
            Icon::ListChecks => "☑️",
            Icon::MapPinOff => "📍",
            Icon::Megaphone => "📢",
            Icon::School => "🏫",
            Icon::ShieldAlert => "🛡️",
            Icon::TrendingDown => "📉",
            Icon::TrendingUp => "📈",
            Icon::Users => "👥",
            Icon::Wallet => "👛",
            Icon::Facebook => "f",
            Icon::Twitter => "𝕏",
            Icon::Instagram => "◎",
            Icon::Linkedin => "in",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::MapPin => "📍",
        }
    }
}

// Hero

pub struct HeroStat {
    pub icon: Icon,
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [HeroStat; 4] = [
    HeroStat { icon: Icon::Users, target: 10_000, suffix: "+", label: "Students Counselled" },
    HeroStat { icon: Icon::Building, target: 500, suffix: "+", label: "Partner Colleges" },
    HeroStat { icon: Icon::Award, target: 5, suffix: "+", label: "Branches" },
    HeroStat { icon: Icon::GraduationCap, target: 30, suffix: "+", label: "Expert counselor" },
];

// Mistakes

pub struct Mistake {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub static MISTAKES: [Mistake; 8] = [
    Mistake {
        icon: Icon::Building,
        title: "Choosing College By Brand Name Only",
        description: "Many Parents Select Colleges Based Only On Brand Name Or Advertisements. A well-known Name Doesn't Always Guarantee Good Placements, Faculty Quality, Or Career Growth Opportunities.",
    },
    Mistake {
        icon: Icon::TrendingDown,
        title: "Ignoring Placement & Internship Records",
        description: "Placement And Internship Opportunities Are Critical For A Student's Career. Without Checking Real Placement Data, Students May Face Difficulty Getting Good Job Opportunities After Graduation.",
    },
    Mistake {
        icon: Icon::HeartOff,
        title: "Lack Of Proper Admission Guidance",
        description: "B.Tech Admission Involves Multiple Options Like Entrance Exams, Counselling, And Direct Admission. Without Expert Guidance, Parents May Miss Better Colleges And Career Opportunities.",
    },
    Mistake {
        icon: Icon::Megaphone,
        title: "Trusting Unverified Sources Or Agents",
        description: "Many parents Rely On Unreliable Agents Or Incomplete Information, Which Can Result In Wrong College Selection And False Placement Expectations.",
    },
    Mistake {
        icon: Icon::Users,
        title: "Missing Important Admission Deadlines",
        description: "Different Colleges And Counselling Processes Have Strict Timelines. Missing Deadlines Can Result In Losing The Opportunity To Secure Admission In Better Colleges.",
    },
    Mistake {
        icon: Icon::ShieldAlert,
        title: "Not Checking College Approval & Accreditation",
        description: "Approval From Authorities Like AICTE And University Affiliation Is Essential. Choosing Unapproved Colleges Can Create Problems In Degree validity And Future Career Opportunities.",
    },
    Mistake {
        icon: Icon::Footprints,
        title: "Taking Admission in Hurry Without Proper Research",
        description: "Due To Pressure And Confusion, Parents Sometimes Take Quick Decisions Without Proper Comparison, Which Can Affect The Student's Long-Term Career Growth.",
    },
    Mistake {
        icon: Icon::MapPinOff,
        title: "Not Comparing All Available College Options",
        description: "Without Comparing Multiple Colleges, Parents May Select Average Options While Better Colleges With Higher Placement And Growth Opportunities May Be Available.",
    },
];

// College comparison

pub struct CollegeCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub features: &'static [&'static str],
    pub cta: &'static str,
}

pub static COLLEGE_CATEGORIES: [CollegeCategory; 3] = [
    CollegeCategory {
        title: "State Government Colleges",
        icon: Icon::Building,
        features: &[
            "Very Low Tuition Fees (~₹10K–₹50K per year)",
            "Reserved Seats For Domicile Students",
            "Government Scholarships Available (SC/ST/OBC/EWS)",
            "Good Placement Opportunities In Local And Regional Companies",
            "Strong Alumni Network In Government And Private Sectors",
            "Better ROI (Return on Investment) Compared To Private Colleges",
            "Opportunity To Prepare For Government Jobs (PSUs, SSC, GATE)",
            "Stable Academic Environment With Structured Curriculum",
            "Good Option For Students With Limited Budget",
        ],
        cta: "Explore State Colleges",
    },
    CollegeCategory {
        title: "Central Government Colleges",
        icon: Icon::Landmark,
        features: &[
            "Admission Through National-Level Exams (JEE Main & JEE Advanced)",
            "Includes IITs, NITs, IIITs, And Other Centrally Funded Institutes",
            "Excellent Placement Opportunities With Top Companies",
            "World-Class Infrastructure And Advanced Laboratories",
            "Exposure To Cutting-Edge Technologies And Research",
            "Internship Opportunities In Top MNCs (Google, Microsoft, Amazon)",
            "Preferred By Top Recruiters And Tech Companies",
            "Opportunity To Work On Government-Funded Research Projects",
            "Strong Coding Culture And Competitive Environment",
        ],
        cta: "Explore Top Institutes",
    },
    CollegeCategory {
        title: "Deemed & Private Colleges",
        icon: Icon::GraduationCap,
        features: &[
            "Flexible Admission Through JEE Main, State Exams, Or Direct Admission",
            "Wide Range Of B.Tech Specializations (AI, Data Science, Cybersecurity, etc.)",
            "Modern Infrastructure With Smart Classrooms And Advanced Labs",
            "Regular Workshops, Seminars, And Industry Guest Lectures",
            "Good Placement Opportunities In IT And Private Sector Companies",
            "Dedicated Placement Training (Aptitude, Coding, Interview Prep)",
            "Better Campus Facilities (Hostel, Sports, Innovation Labs)",
            "Focus On Skill Development And Emerging Technologies",
            "Opportunities To Participate In Hackathons And Tech Events",
        ],
        cta: "Explore Private Colleges",
    },
];

// Counselling bodies

pub struct CounsellingBody {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Free-form display string, not parsed.
    pub students: &'static str,
    pub colleges: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub static COUNSELLING_BODIES: [CounsellingBody; 8] = [
    CounsellingBody {
        title: "JoSAA",
        subtitle: "Joint Seat Allocation Authority",
        students: "62,853",
        colleges: "121",
        description: "JoSAA conducts centralized counselling for IITs, NITs, IIITs, and GFTIs based on JEE Main and Advanced ranks.",
        icon: Icon::GraduationCap,
    },
    CounsellingBody {
        title: "CSAB",
        subtitle: "Central Seat Allocation Board",
        students: "8,000",
        colleges: "32",
        description: "CSAB conducts special rounds counselling to fill vacant seats in NITs, IIITs and GFTIs.",
        icon: Icon::FileText,
    },
    CounsellingBody {
        title: "JAC Delhi",
        subtitle: "Joint Admission Counselling Delhi",
        students: "7,000",
        colleges: "4",
        description: "JAC Delhi manages admissions for DTU, NSUT, IGDTUW, and IIIT Delhi based on JEE Main.",
        icon: Icon::Landmark,
    },
    CounsellingBody {
        title: "IPU Counselling",
        subtitle: "Guru Gobind Singh Indraprastha University",
        students: "43,000",
        colleges: "130",
        description: "IPU counselling is conducted for admission into various B.Tech colleges affiliated with IPU.",
        icon: Icon::Building,
    },
    CounsellingBody {
        title: "HSTES",
        subtitle: "Haryana State Technical Entrance Society",
        students: "24,000",
        colleges: "143",
        description: "HSTES Counselling is conducted for engineering colleges across Haryana.",
        icon: Icon::Users,
    },
    CounsellingBody {
        title: "AKTU Counselling",
        subtitle: "Dr. A.P.J. Abdul Kalam Technical University",
        students: "1,20,000",
        colleges: "800",
        description: "AKTU conducts centralized counselling for engineering colleges across Uttar Pradesh.",
        icon: Icon::GraduationCap,
    },
    CounsellingBody {
        title: "MHT CET",
        subtitle: "Maharastra Common Entrance Test",
        students: "1,30,000",
        colleges: "450",
        description: "MHT CET conducts centralized counselling for engineering colleges across Maharastra.",
        icon: Icon::Users,
    },
    CounsellingBody {
        title: "COMEDK",
        subtitle: "Consortium of Medical Engineering Colleges",
        students: "25,000",
        colleges: "20",
        description: "COMEDK counselling is conducted for private engineering colleges in Karnataka.",
        icon: Icon::BookOpen,
    },
];

// Admission process

pub struct StepRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub static ADMISSION_STEPS: [StepRecord; 5] = [
    StepRecord {
        id: 1,
        title: "Registration / Apply Online",
        description: "Visit the official portal and fill out the application form with your personal and academic details.",
        icon: Icon::ClipboardList,
    },
    StepRecord {
        id: 2,
        title: "Entrance Exam (JEE / State)",
        description: "Appear for JEE Main or the relevant state entrance exam and download your scorecard after results.",
        icon: Icon::FileText,
    },
    StepRecord {
        id: 3,
        title: "Merit List & Counselling",
        description: "Check the published merit list and register for your preferred counselling round to select a branch.",
        icon: Icon::ListChecks,
    },
    StepRecord {
        id: 4,
        title: "Document Verification",
        description: "Attend the verification session with all original documents — marksheets, ID proof, category certificate etc.",
        icon: Icon::BadgeCheck,
    },
    StepRecord {
        id: 5,
        title: "Fee Payment & Enrollment",
        description: "Pay the admission fee online or offline and complete your final enrollment to confirm your seat.",
        icon: Icon::Wallet,
    },
];

// Documentation

pub struct DocumentCategory {
    pub icon: Icon,
    pub title: &'static str,
    pub emoji: &'static str,
    /// Gradient token, mapped to a CSS class by the section.
    pub gradient: &'static str,
    pub documents: &'static [&'static str],
}

pub static DOCUMENT_CATEGORIES: [DocumentCategory; 4] = [
    DocumentCategory {
        icon: Icon::GraduationCap,
        title: "Academic Certificates",
        emoji: "🎓",
        gradient: "saffron-light",
        documents: &[
            "10th Class Marksheet & Certificate",
            "12th Class Marksheet & Certificate",
            "Transfer Certificate (TC)",
            "School Leaving Certificate",
        ],
    },
    DocumentCategory {
        icon: Icon::CreditCard,
        title: "Identity Proofs",
        emoji: "🪪",
        gradient: "saffron-dark",
        documents: &[
            "Aadhaar Card (Original + Photocopy)",
            "Date of Birth Proof",
            "8 Passport-size Photographs",
            "Signature on white paper",
        ],
    },
    DocumentCategory {
        icon: Icon::FileText,
        title: "Government Certificates",
        emoji: "📋",
        gradient: "saffron-light",
        documents: &[
            "Caste Certificate (SC/ST/OBC if applicable)",
            "Income Certificate (for fee concession)",
            "Domicile / Residence Certificate",
            "EWS Certificate (if applicable)",
        ],
    },
    DocumentCategory {
        icon: Icon::School,
        title: "School Certificates",
        emoji: "📜",
        gradient: "saffron-dark",
        documents: &[
            "Migration Certificate",
            "Character Certificate",
            "Conduct Certificate",
            "Gap Certificate (if applicable)",
        ],
    },
];

// Placement webinars

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementKind {
    OnCampus,
    OffCampus,
}

impl PlacementKind {
    pub fn label(self) -> &'static str {
        match self {
            PlacementKind::OnCampus => "On-Campus",
            PlacementKind::OffCampus => "Off-Campus",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            PlacementKind::OnCampus => Icon::Building,
            PlacementKind::OffCampus => Icon::Globe,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Webinar {
    pub id: &'static str,
    pub kind: PlacementKind,
    pub title: &'static str,
    pub speaker: &'static str,
    pub role: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub live_soon: bool,
}

pub static UPCOMING_WEBINARS: [Webinar; 2] = [
    Webinar {
        id: "w1",
        kind: PlacementKind::OnCampus,
        title: "Crack Campus Placements: Strategy & Resume Tips",
        speaker: "Dr. Anjali Mehra",
        role: "Placement Director, IIT Alumni",
        date: "March 15, 2025",
        time: "11:00 AM IST",
        live_soon: true,
    },
    Webinar {
        id: "w2",
        kind: PlacementKind::OffCampus,
        title: "Off-Campus Hiring: LinkedIn, Job Boards & Cold Outreach",
        speaker: "Rahul Verma",
        role: "Senior HR, TCS & Ex-Infosys",
        date: "March 22, 2025",
        time: "3:00 PM IST",
        live_soon: false,
    },
];

#[derive(Debug, PartialEq)]
pub struct Recording {
    pub id: &'static str,
    pub title: &'static str,
    pub speaker: &'static str,
    pub duration: &'static str,
    pub kind: PlacementKind,
    pub thumbnail: &'static str,
}

pub static PAST_RECORDINGS: [Recording; 4] = [
    Recording {
        id: "r1",
        title: "How to Ace Technical Interviews",
        speaker: "Priya Sharma",
        duration: "52 min",
        kind: PlacementKind::OnCampus,
        thumbnail: "🖥️",
    },
    Recording {
        id: "r2",
        title: "Off-Campus Job Hunt: A Step-by-Step Guide",
        speaker: "Arun Nair",
        duration: "45 min",
        kind: PlacementKind::OffCampus,
        thumbnail: "🌐",
    },
    Recording {
        id: "r3",
        title: "Group Discussion & HR Round Mastery",
        speaker: "Sneha Kapoor",
        duration: "38 min",
        kind: PlacementKind::OnCampus,
        thumbnail: "💬",
    },
    Recording {
        id: "r4",
        title: "Building a Portfolio That Gets You Hired",
        speaker: "Karthik Rao",
        duration: "61 min",
        kind: PlacementKind::OffCampus,
        thumbnail: "📁",
    },
];

pub struct ComparisonStat {
    pub label: &'static str,
    pub on_campus: &'static str,
    pub off_campus: &'static str,
    pub icon: Icon,
}

pub static COMPARISON_STATS: [ComparisonStat; 4] = [
    ComparisonStat {
        label: "Eligibility",
        on_campus: "CGPA ≥ 6.5 + No backlogs",
        off_campus: "Varies by company",
        icon: Icon::Award,
    },
    ComparisonStat {
        label: "Process",
        on_campus: "Aptitude → GD → Interview",
        off_campus: "Apply → Screen → Interview",
        icon: Icon::TrendingUp,
    },
    ComparisonStat {
        label: "Companies",
        on_campus: "200+ on-campus recruiters",
        off_campus: "500+ hiring off-campus",
        icon: Icon::Building,
    },
    ComparisonStat {
        label: "Avg. Package",
        on_campus: "₹6.5 LPA",
        off_campus: "₹5.8 LPA",
        icon: Icon::Briefcase,
    },
];

pub struct PlacementCounter {
    pub label: &'static str,
    pub target: u64,
    pub suffix: &'static str,
}

pub static PLACEMENT_COUNTERS: [PlacementCounter; 4] = [
    PlacementCounter { label: "Campus Recruiters", target: 200, suffix: "+" },
    PlacementCounter { label: "Off-Campus Openings", target: 500, suffix: "+" },
    PlacementCounter { label: "Placement Rate", target: 85, suffix: "%" },
    PlacementCounter { label: "Avg. Package (LPA)", target: 6, suffix: ".5 ₹" },
];

// Footer

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static QUICK_LINKS: [FooterLink; 5] = [
    FooterLink { label: "About Us", href: "#" },
    FooterLink { label: "B.Tech Programs", href: "#" },
    FooterLink { label: "Admissions", href: "#" },
    FooterLink { label: "Placements", href: "#" },
    FooterLink { label: "Contact", href: "#" },
];

pub static PROGRAMS: [&str; 5] = [
    "Computer Science",
    "Electronics & Communication",
    "Mechanical Engineering",
    "Civil Engineering",
    "AI & Data Science",
];

pub struct Social {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

pub static SOCIALS: [Social; 4] = [
    Social { icon: Icon::Facebook, href: "#", label: "Facebook" },
    Social { icon: Icon::Twitter, href: "#", label: "Twitter" },
    Social { icon: Icon::Instagram, href: "#", label: "Instagram" },
    Social { icon: Icon::Linkedin, href: "#", label: "LinkedIn" },
];

pub static CONTACTS: [(Icon, &str); 3] = [
    (Icon::Phone, "+91 98765 43210"),
    (Icon::Mail, "admissions@career4s.com"),
    (Icon::MapPin, "123 Education Hub, Tech Park, Bangalore - 560001"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counselling_grid_has_eight_bodies_in_order() {
        let titles: Vec<_> = COUNSELLING_BODIES.iter().map(|b| b.title).collect();
        assert_eq!(
            titles,
            [
                "JoSAA",
                "CSAB",
                "JAC Delhi",
                "IPU Counselling",
                "HSTES",
                "AKTU Counselling",
                "MHT CET",
                "COMEDK",
            ]
        );
    }

    #[test]
    fn admission_steps_are_numbered_one_to_five() {
        let ids: Vec<_> = ADMISSION_STEPS.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn webinar_and_recording_ids_are_unique() {
        let mut ids: Vec<_> = UPCOMING_WEBINARS
            .iter()
            .map(|w| w.id)
            .chain(PAST_RECORDINGS.iter().map(|r| r.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), UPCOMING_WEBINARS.len() + PAST_RECORDINGS.len());
    }

    #[test]
    fn every_document_category_lists_four_documents() {
        assert_eq!(DOCUMENT_CATEGORIES.len(), 4);
        for category in &DOCUMENT_CATEGORIES {
            assert_eq!(category.documents.len(), 4, "{}", category.title);
        }
    }

    #[test]
    fn college_features_are_not_blank() {
        for college in &COLLEGE_CATEGORIES {
            assert!(!college.features.is_empty());
            assert!(college.features.iter().all(|f| !f.trim().is_empty()));
        }
    }
}
