//! Guidance directory: display name → link details for the companies,
//! hackathons and competitions referenced by career insights.
//!
//! Lookups never fail; unknown names resolve to [`UNLISTED`].

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Link details for one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: &'static str,
    pub description: &'static str,
}

/// Default entry returned for names the directory does not know.
pub const UNLISTED: LinkEntry = LinkEntry {
    url: "#",
    description: "No details available.",
};

lazy_static! {
    static ref COMPANIES: HashMap<&'static str, LinkEntry> = [
        ("Google", LinkEntry { url: "https://careers.google.com/", description: "Google Careers: Apply for tech roles and internships." }),
        ("Microsoft", LinkEntry { url: "https://careers.microsoft.com/", description: "Microsoft Careers: Explore opportunities in cloud, AI, software." }),
        ("Amazon", LinkEntry { url: "https://www.amazon.jobs/", description: "Amazon Careers: Apply for software, data, and business roles." }),
        ("Infosys", LinkEntry { url: "https://www.infosys.com/careers/", description: "Infosys Careers: Opportunities in IT and consulting." }),
        ("TCS", LinkEntry { url: "https://www.tcs.com/careers", description: "TCS Careers: Software, consulting, and tech internships." }),
        ("Zoho", LinkEntry { url: "https://www.zoho.com/careers.html", description: "Zoho Careers: Join a product-based tech company." }),
        ("Deloitte", LinkEntry { url: "https://www2.deloitte.com/global/en/careers.html", description: "Deloitte Careers: Analytics, consulting and finance roles." }),
        ("EY", LinkEntry { url: "https://www.ey.com/en_gl/careers", description: "EY Careers: Audit, consulting, and tech roles." }),
        ("Accenture", LinkEntry { url: "https://www.accenture.com/us-en/careers", description: "Accenture Careers: IT, consulting, AI and cloud roles." }),
        ("Flipkart", LinkEntry { url: "https://www.flipkartcareers.com/", description: "Flipkart Careers: E-commerce software and analytics." }),
        ("Cisco", LinkEntry { url: "https://jobs.cisco.com/", description: "Cisco Careers: Networking, security, and tech roles." }),
        ("Palo Alto Networks", LinkEntry { url: "https://www.paloaltonetworks.com/careers", description: "Cybersecurity roles at Palo Alto Networks." }),
        ("IBM", LinkEntry { url: "https://www.ibm.com/employment/", description: "IBM Careers: Software, AI, cloud, and research roles." }),
        ("OpenAI", LinkEntry { url: "https://openai.com/careers", description: "OpenAI Careers: AI research and engineering." }),
        ("Google DeepMind", LinkEntry { url: "https://www.deepmind.com/careers", description: "DeepMind Careers: AI and ML research positions." }),
        ("Meta", LinkEntry { url: "https://www.metacareers.com/", description: "Meta Careers: Software, AI, and product roles." }),
        ("NVIDIA", LinkEntry { url: "https://www.nvidia.com/en-us/about-nvidia/careers/", description: "NVIDIA Careers: AI, GPU, and software roles." }),
    ]
    .into_iter()
    .collect();

    static ref HACKATHONS: HashMap<&'static str, LinkEntry> = [
        ("Smart India Hackathon", LinkEntry { url: "https://www.sih.gov.in/", description: "India's largest government-led hackathon." }),
        ("Google Solution Challenge", LinkEntry { url: "https://developers.google.com/community/dsc/challenges", description: "Google DSC challenge for building solutions using Google tech." }),
        ("MLH Hackathons", LinkEntry { url: "https://mlh.io/", description: "Major League Hacking community hackathons." }),
        ("Analytics Vidhya Hackathons", LinkEntry { url: "https://datahack.analyticsvidhya.com/", description: "Data science hackathons organized by Analytics Vidhya." }),
        ("Kaggle Days", LinkEntry { url: "https://www.kaggle.com/competitions", description: "Kaggle competitions for real-world datasets." }),
        ("Cyber Apocalypse", LinkEntry { url: "https://www.ctf365.com/", description: "Cybersecurity Capture The Flag challenges." }),
        ("CTFtime Events", LinkEntry { url: "https://ctftime.org/", description: "Global CTF competitions in cybersecurity." }),
        ("AI Hackathons", LinkEntry { url: "https://www.hackathon.com/", description: "AI-focused hackathons worldwide." }),
        ("Kaggle Competitions", LinkEntry { url: "https://www.kaggle.com/competitions", description: "AI and ML competitions for all levels." }),
    ]
    .into_iter()
    .collect();

    static ref COMPETITIONS: HashMap<&'static str, LinkEntry> = [
        ("CodeChef", LinkEntry { url: "https://www.codechef.com/contests", description: "Competitive programming contests on CodeChef." }),
        ("LeetCode", LinkEntry { url: "https://leetcode.com/contest/", description: "Weekly coding contests on LeetCode." }),
        ("HackerRank", LinkEntry { url: "https://www.hackerrank.com/contests", description: "Programming contests on HackerRank." }),
        ("Kaggle", LinkEntry { url: "https://www.kaggle.com/competitions", description: "Data science competitions on Kaggle." }),
        ("StrataScratch", LinkEntry { url: "https://www.stratascratch.com/solutions/", description: "Data science problem-solving challenges." }),
        ("Hack The Box", LinkEntry { url: "https://www.hackthebox.eu/", description: "Cybersecurity challenges platform." }),
        ("TryHackMe", LinkEntry { url: "https://tryhackme.com/", description: "Learn and compete in cybersecurity labs and challenges." }),
    ]
    .into_iter()
    .collect();
}

pub fn company(name: &str) -> LinkEntry {
    COMPANIES.get(name).copied().unwrap_or(UNLISTED)
}

pub fn hackathon(name: &str) -> LinkEntry {
    HACKATHONS.get(name).copied().unwrap_or(UNLISTED)
}

pub fn competition(name: &str) -> LinkEntry {
    COMPETITIONS.get(name).copied().unwrap_or(UNLISTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_company() {
        let entry = company("Google");
        assert_eq!(entry.url, "https://careers.google.com/");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(company("Some Startup"), UNLISTED);
        assert_eq!(hackathon("Garage Jam"), UNLISTED);
        assert_eq!(competition("Backyard Cup"), UNLISTED);
    }

    #[test]
    fn test_catalog_insights_resolve() {
        // Every name referenced by the builtin catalog has a real entry.
        let catalog = crate::catalog::Catalog::builtin();
        for profile in catalog.iter() {
            for name in &profile.insight.companies {
                assert_ne!(company(name), UNLISTED, "unlisted company: {}", name);
            }
            for name in &profile.insight.hackathons {
                assert_ne!(hackathon(name), UNLISTED, "unlisted hackathon: {}", name);
            }
            for name in &profile.insight.competitions {
                assert_ne!(competition(name), UNLISTED, "unlisted competition: {}", name);
            }
        }
    }
}
