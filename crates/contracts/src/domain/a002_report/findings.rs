//! Static detail content shown on each category sub-report page.

use crate::enums::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindingRow {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindingSection {
    pub title: &'static str,
    pub description: &'static str,
    pub rows: &'static [FindingRow],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDetail {
    pub category: Category,
    pub description: &'static str,
    pub sections: &'static [FindingSection],
    pub methodology: &'static [&'static str],
    pub summary: &'static str,
}

const fn row(label: &'static str, value: &'static str) -> FindingRow {
    FindingRow { label, value }
}

const IDENTITY: CategoryDetail = CategoryDetail {
    category: Category::Identity,
    description: "Verification of legal identity, SSN and residential history",
    sections: &[
        FindingSection {
            title: "Legal Name Verification",
            description: "Full legal name confirmation and validation",
            rows: &[
                row("Name match", "Exact match"),
                row("Known aliases", "None found"),
                row("Source", "Government-issued ID"),
            ],
        },
        FindingSection {
            title: "Social Security Verification",
            description: "Social Security Number validation and matching",
            rows: &[
                row("SSN validity", "Valid"),
                row("Issued", "Georgia, 1994-1996"),
                row("Death master file", "No match"),
            ],
        },
        FindingSection {
            title: "Address History",
            description: "Residential address verification and history",
            rows: &[
                row("Atlanta, GA", "2020 - present"),
                row("Tampa, FL", "2016 - 2020"),
                row("Charlotte, NC", "2012 - 2016"),
            ],
        },
    ],
    methodology: &[
        "Government ID document check",
        "SSN trace against credit header data",
        "Address history correlation",
    ],
    summary: "All identity verification checks have passed. The candidate's legal name, \
              Social Security Number, and address history have been successfully validated \
              with no red flags identified.",
};

const EMPLOYMENT: CategoryDetail = CategoryDetail {
    category: Category::Employment,
    description: "Verification of previous employers, titles and dates",
    sections: &[
        FindingSection {
            title: "TechWorks Inc.",
            description: "Software Engineer, 2022 - 2024",
            rows: &[
                row("Dates", "Verified"),
                row("Title", "Verified"),
                row("Eligible for rehire", "Yes"),
            ],
        },
        FindingSection {
            title: "QuickByte LLC",
            description: "Junior Developer, 2020 - 2022",
            rows: &[
                row("Dates", "Verified"),
                row("Title", "Partial (records incomplete)"),
                row("Eligible for rehire", "Not disclosed"),
            ],
        },
    ],
    methodology: &[
        "Direct contact with HR departments",
        "Third-party employment databases",
        "Payroll record confirmation where available",
    ],
    summary: "Most recent employment at TechWorks Inc. is fully verified with excellent \
              standing. Previous employment at QuickByte LLC shows verified dates but \
              incomplete job title records. This is a minor discrepancy and does not \
              indicate falsification.",
};

const CRIMINAL: CategoryDetail = CategoryDetail {
    category: Category::Criminal,
    description: "County, state and federal criminal record searches",
    sections: &[
        FindingSection {
            title: "National Criminal Database",
            description: "Comprehensive national criminal record search",
            rows: &[
                row("Felonies", "None found"),
                row("Misdemeanors", "None found"),
            ],
        },
        FindingSection {
            title: "State-Level Record Search",
            description: "Targeted state criminal record searches",
            rows: &[
                row("Georgia", "No records"),
                row("Florida", "No records"),
                row("North Carolina", "No records"),
            ],
        },
        FindingSection {
            title: "Sex Offender Registry",
            description: "National and state sex offender registry search",
            rows: &[
                row("National registry", "No match"),
                row("State registries", "No match"),
            ],
        },
        FindingSection {
            title: "Additional Searches",
            description: "Supplementary criminal record searches",
            rows: &[
                row("Federal watch lists", "No match"),
                row("OFAC sanctions", "No match"),
            ],
        },
    ],
    methodology: &[
        "Full name and known aliases",
        "Date of birth verification",
        "Social Security Number cross-reference",
        "7-year comprehensive search",
        "All jurisdictions of residence",
    ],
    summary: "Comprehensive criminal background check completed with no records found in \
              national databases, state-level searches across all jurisdictions of residence \
              (GA, FL, NC), sex offender registries, or federal watch lists. The candidate has \
              a clean criminal background.",
};

const EDUCATION: CategoryDetail = CategoryDetail {
    category: Category::Education,
    description: "Verification of degrees and certifications",
    sections: &[
        FindingSection {
            title: "Georgia State University",
            description: "Bachelor of Computer Science, 2016 - 2020",
            rows: &[
                row("Enrollment", "Confirmed"),
                row("Attendance dates", "Confirmed"),
                row("Degree", "Pending verification"),
            ],
        },
        FindingSection {
            title: "Verification Process",
            description: "Steps taken to verify educational credentials",
            rows: &[
                row("Registrar request", "Sent, awaiting response"),
                row("National Student Clearinghouse", "Enrollment record found"),
            ],
        },
    ],
    methodology: &[
        "Registrar's office request",
        "National Student Clearinghouse lookup",
        "Diploma copy review on request",
    ],
    summary: "Student enrollment and attendance at Georgia State University has been \
              confirmed through university records. Final degree verification is pending \
              response from the registrar's office. This is a common delay and does not \
              indicate any issues with the candidate's credentials.",
};

const SOCIAL_MEDIA: CategoryDetail = CategoryDetail {
    category: Category::SocialMedia,
    description: "Review of professional and personal social media accounts",
    sections: &[
        FindingSection {
            title: "Professional Accounts",
            description: "LinkedIn and professional platform analysis",
            rows: &[
                row("LinkedIn", "Appropriate"),
                row("GitHub", "Appropriate"),
            ],
        },
        FindingSection {
            title: "Personal Social Media",
            description: "Personal social media platform analysis",
            rows: &[
                row("Twitter / X", "3 posts flagged (sarcastic humor)"),
                row("Instagram", "Private account"),
            ],
        },
    ],
    methodology: &[
        "Automated content screening",
        "Manual review of flagged posts",
        "Screening for discriminatory, violent or explicit content",
    ],
    summary: "Professional social media presence is excellent with appropriate content and \
              connections. Personal accounts show minimal activity with only minor sarcastic \
              humor posts flagged by automated screening. All flagged content falls within \
              acceptable workplace standards.",
};

const ONLINE_PRESENCE: CategoryDetail = CategoryDetail {
    category: Category::OnlinePresence,
    description: "Search engine and professional web presence analysis",
    sections: &[
        FindingSection {
            title: "Professional Web Presence",
            description: "Personal websites, portfolios, and professional profiles",
            rows: &[
                row("Portfolio website", "Active, professional"),
                row("Technical blog", "Active"),
            ],
        },
        FindingSection {
            title: "Search Engine Analysis",
            description: "Google and other search engine result analysis",
            rows: &[
                row("Negative results", "None"),
                row("News mentions", "None"),
            ],
        },
        FindingSection {
            title: "Digital Footprint Quality",
            description: "Overall assessment of online professional presence",
            rows: &[row("Assessment", "Positive")],
        },
    ],
    methodology: &[
        "Search engine result review",
        "Professional platform profile review",
        "Developer community contribution review",
    ],
    summary: "The candidate maintains an exemplary professional online presence with a \
              high-quality portfolio website, active technical blog, and meaningful \
              contributions to developer communities. Search engine results show consistent \
              professional branding with no negative content.",
};

pub fn category_detail(category: Category) -> &'static CategoryDetail {
    match category {
        Category::Identity => &IDENTITY,
        Category::Employment => &EMPLOYMENT,
        Category::Criminal => &CRIMINAL,
        Category::Education => &EDUCATION,
        Category::SocialMedia => &SOCIAL_MEDIA,
        Category::OnlinePresence => &ONLINE_PRESENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_content() {
        for category in Category::all() {
            let detail = category_detail(category);
            assert_eq!(detail.category, category);
            assert!(!detail.sections.is_empty());
            assert!(!detail.methodology.is_empty());
            assert!(!detail.summary.is_empty());
        }
    }
}
