pub const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #fafafa;
        color: #171717;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    @keyframes pulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.05); }
        100% { transform: scale(1); }
    }
    @keyframes slideIn {
        from { opacity: 0; transform: translateX(100px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes riseIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .pulse {
        animation: pulse 2s ease-in-out infinite;
    }
    .offer-bar {
        position: sticky;
        top: 0;
        z-index: 50;
        background: #dc2626;
        color: #fff;
        padding: 0.5rem;
        text-align: center;
        font-weight: 700;
        box-shadow: 0 4px 6px rgba(0,0,0,0.1);
    }
    .offer-time {
        font-variant-numeric: tabular-nums;
    }
    .hero {
        background: linear-gradient(to right, #ec4899, #f43f5e);
        color: #fff;
        padding: 6rem 1rem;
        text-align: center;
    }
    .hero-content {
        max-width: 56rem;
        margin: 0 auto;
        animation: riseIn 0.6s ease-out;
    }
    .hero h1 {
        font-size: 3rem;
        font-weight: 700;
        line-height: 1.2;
        margin-bottom: 1.5rem;
    }
    .discount-badge {
        display: inline-block;
        background: #10b981;
        padding: 0.25rem 1rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin-bottom: 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: rgba(255,255,255,0.9);
        max-width: 48rem;
        margin: 0 auto 2.5rem;
        line-height: 1.6;
    }
    .hero-cta, .final-cta-button {
        background: #fff;
        color: #db2777;
        border: none;
        border-radius: 9999px;
        padding: 1rem 2rem;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
        box-shadow: 0 20px 25px rgba(0,0,0,0.15);
    }
    .carousel-section {
        padding: 5rem 1rem;
        background: #fff;
        overflow: hidden;
    }
    .carousel {
        max-width: 64rem;
        margin: 0 auto;
        position: relative;
    }
    .carousel-frame {
        position: relative;
        aspect-ratio: 21 / 9;
        overflow: hidden;
        border-radius: 1rem;
        border: 4px solid #fbcfe8;
        background: #e5e5e5;
        box-shadow: 0 25px 50px rgba(0,0,0,0.25);
    }
    .slide {
        position: absolute;
        inset: 0;
        animation: slideIn 0.5s ease-in-out;
    }
    .slide img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .slide-caption {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
        padding: 3rem;
        color: #fff;
        background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);
    }
    .slide-caption h3 {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }
    .carousel-control {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        background: rgba(255,255,255,0.2);
        backdrop-filter: blur(12px);
        border: none;
        border-radius: 9999px;
        color: #fff;
        font-size: 2rem;
        width: 3rem;
        height: 3rem;
        cursor: pointer;
        z-index: 10;
    }
    .carousel-control:hover {
        background: rgba(255,255,255,0.4);
    }
    .carousel-control.prev { left: 1rem; }
    .carousel-control.next { right: 1rem; }
    .carousel-dots {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 1.5rem;
    }
    .dot {
        width: 0.625rem;
        height: 0.625rem;
        border: none;
        border-radius: 9999px;
        background: #d4d4d4;
        cursor: pointer;
        transition: all 0.3s;
    }
    .dot.active {
        width: 2rem;
        background: #db2777;
    }
    .features {
        padding: 5rem 1rem;
        max-width: 72rem;
        margin: 0 auto;
        text-align: center;
    }
    .section-subtitle {
        color: #737373;
        max-width: 42rem;
        margin: 0 auto 4rem;
    }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        text-align: left;
    }
    .feature-item {
        background: #fff;
        padding: 2rem;
        border-radius: 1rem;
        border: 1px solid #f5f5f5;
        box-shadow: 0 1px 2px rgba(0,0,0,0.05);
        transition: transform 0.2s;
    }
    .feature-item:hover {
        transform: translateY(-5px);
    }
    .feature-icon {
        width: 3rem;
        height: 3rem;
        background: #fdf2f8;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .testimonials {
        display: flex;
        align-items: center;
        gap: 3rem;
        padding: 5rem 1rem;
        max-width: 72rem;
        margin: 0 auto;
        background: #fff;
    }
    .testimonials-summary, .testimonials-list {
        flex: 1;
    }
    .testimonials-list {
        display: grid;
        gap: 1.5rem;
    }
    .stars {
        color: #facc15;
        letter-spacing: 0.1em;
    }
    .rating-text {
        font-weight: 700;
        margin-left: 0.5rem;
    }
    .rating-note {
        font-size: 0.75rem;
        color: #a3a3a3;
    }
    .testimonial {
        background: #fafafa;
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid #fce7f3;
    }
    .testimonial-header {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 0.5rem;
    }
    .verified, .check {
        background: #ec4899;
        color: #fff;
        border-radius: 9999px;
        width: 1.25rem;
        height: 1.25rem;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        font-size: 0.75rem;
        flex-shrink: 0;
    }
    .testimonial-name {
        font-weight: 700;
        color: #db2777;
    }
    .separator { color: #d4d4d4; }
    .testimonial-role {
        font-size: 0.75rem;
        color: #737373;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .testimonial-content {
        font-style: italic;
        color: #404040;
        line-height: 1.6;
    }
    .product {
        display: flex;
        align-items: center;
        gap: 3rem;
        padding: 5rem 1rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .product-image {
        flex: 1;
        position: relative;
    }
    .product-image img {
        width: 100%;
        max-width: 28rem;
        display: block;
        margin: 0 auto;
        border-radius: 2rem;
        border: 8px solid #fff;
        box-shadow: 0 25px 50px rgba(0,0,0,0.25);
    }
    .collection-badge {
        position: absolute;
        bottom: -1.5rem;
        right: -1.5rem;
        background: #fff;
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid #fce7f3;
        box-shadow: 0 20px 25px rgba(0,0,0,0.1);
    }
    .collection-title {
        color: #db2777;
        font-weight: 700;
        font-size: 1.5rem;
    }
    .collection-count {
        color: #737373;
        font-size: 0.875rem;
    }
    .product-details {
        flex: 1;
    }
    .deliverables {
        list-style: none;
        padding: 0;
    }
    .deliverables li {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1rem;
        color: #404040;
    }
    .price-box {
        margin-top: 2.5rem;
        padding: 1.5rem;
        background: #fff;
        border-radius: 1rem;
        border: 1px solid #fce7f3;
        text-align: center;
    }
    .old-price {
        color: #737373;
        text-decoration: line-through;
        font-size: 1.125rem;
    }
    .new-price {
        color: #db2777;
        font-weight: 700;
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .checkout-link {
        display: block;
        background: #db2777;
        color: #fff;
        padding: 1rem;
        border-radius: 9999px;
        font-weight: 700;
        font-size: 1.125rem;
        text-decoration: none;
        animation-duration: 1.5s;
    }
    .checkout-link:hover {
        background: #be185d;
    }
    .final-cta {
        padding: 5rem 1rem;
    }
    .final-cta-box {
        max-width: 56rem;
        margin: 0 auto;
        background: #db2777;
        border-radius: 2rem;
        padding: 5rem;
        text-align: center;
        color: #fff;
    }
    .final-cta-box h2 {
        font-size: 3rem;
    }
    .final-cta-box p {
        color: #fce7f3;
        max-width: 36rem;
        margin: 0 auto 2.5rem;
    }
    .final-cta-actions {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
    }
    .secure-note {
        color: #fce7f3;
        font-size: 0.875rem;
    }
    .landing-footer {
        padding: 3rem 1rem;
        border-top: 1px solid #e5e5e5;
        text-align: center;
        color: #737373;
        font-size: 0.875rem;
    }
    .footer-links {
        display: flex;
        justify-content: center;
        gap: 1.5rem;
    }
    .footer-links a {
        color: inherit;
        text-decoration: none;
    }
    .footer-links a:hover {
        color: #db2777;
    }
    @media (max-width: 768px) {
        .hero { padding: 3rem 1rem; }
        .hero h1 { font-size: 1.5rem; }
        .carousel-frame { aspect-ratio: 1 / 1; }
        .slide-caption { padding: 1.5rem; }
        .slide-caption h3 { font-size: 1.25rem; }
        .carousel-control { background: rgba(0,0,0,0.3); width: 2.5rem; height: 2.5rem; }
        .carousel-control.prev { left: 0.5rem; }
        .carousel-control.next { right: 0.5rem; }
        .features-grid { grid-template-columns: 1fr; }
        .testimonials, .product, .final-cta-actions { flex-direction: column; }
        .product-image { order: 2; width: 100%; }
        .collection-badge { transform: scale(0.75); bottom: -1rem; right: -0.5rem; }
        .final-cta-box { padding: 2rem; border-radius: 1.5rem; }
        .final-cta-box h2, .landing-page h2 { font-size: 1.5rem; }
    }
"#;
