pub fn deploy_form_url() -> &'static str {
    "https://docs.google.com/forms/d/e/1FAIpQLScVqOcJpZ__TXaxCAcFfG20RlWJ1XmaoM_dlSzA9w2eVroEWQ/viewform?embedded=true"
}

pub fn schedule_call_url() -> &'static str {
    "https://calendly.com/ninedreamsss/30min"
}

pub fn concept_preview_url() -> &'static str {
    "https://drive.google.com/file/d/1j8RZEQ7nXJNe4vivE9UQ7whvc0h5F2iL/preview"
}

pub fn concept_download_url() -> &'static str {
    "https://drive.google.com/uc?export=download&id=1j8RZEQ7nXJNe4vivE9UQ7whvc0h5F2iL"
}
