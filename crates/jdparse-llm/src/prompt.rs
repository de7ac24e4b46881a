/// System instruction for the structured-extraction call.
pub(crate) const SYSTEM_PROMPT: &str = "You are a precise data extraction assistant. \
Extract job description fields in valid JSON format. Follow the schema exactly. \
Return only JSON without any additional text or formatting.";

/// Build the user prompt embedding the job-description text into the fixed
/// schema-and-guidelines template.
pub(crate) fn build_user_prompt(text: &str) -> String {
    format!(
        r##"Extract job description data as JSON using this exact format. Pay special attention to salary extraction - look for patterns like "12-17 LPA", "CTC in INR", salary ranges, and convert appropriately:

{{
    "title": "",
    "Qualifications": {{
        "Preferred": [],
        "Required": []
    }},
    "noOfPositions": "",
    "JobLocation": {{
        "Location": "",
        "City": "",
        "State": "",
        "Country": "",
        "IsoCountryCode": "",
        "ZipCode": ""
    }},
    "JobType": "",
    "SalaryOffered": {{
        "MinAmount": "",
        "MaxAmount": "",
        "Currency": ""
    }},
    "ContractDuration": "",
    "officeTimings": "",
    "education": [],
    "ContactPhone": "",
    "ContactPersonName": "",
    "InterviewType": "",
    "InterviewDate": "",
    "InterviewTime": "",
    "InterviewLocation": ""
}}

EXTRACTION GUIDELINES:
- LPA = Lakhs Per Annum, CTC = Cost to Company
- For salary: Look for patterns like "12-17 LPA", "CTC in INR", "X-Y Lakhs", salary ranges. Extract MinAmount and MaxAmount as numbers only (e.g., "12 Lakhs", "17 Lakhs"), Currency as "INR", "USD", etc.
- For qualifications: Split "Must have" into Required array, "Good to have" into Preferred array
- For location: Extract city, state, country from work location mentions
- For positions: Look for "No. of Positions", "#10", "10 positions", etc.
- For job type: Full time, Part time, Contract, etc.
- For timings: Look for working hours, office timings
- For education: Extract degree requirements
- For interview details: Extract interview rounds, panel availability, process details
- Use empty string "" for missing text fields, empty array [] for missing array fields

Job Description:
{text}
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_the_text() {
        let prompt = build_user_prompt("We are hiring a staff engineer in Pune.");
        assert!(prompt.contains("We are hiring a staff engineer in Pune."));
        assert!(prompt.contains("\"SalaryOffered\""));
        assert!(prompt.contains("EXTRACTION GUIDELINES"));
    }
}
